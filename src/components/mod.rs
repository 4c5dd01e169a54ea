// Shared UI components
pub mod charts;
pub mod complaint_form;
pub mod forms;
pub mod image_upload;
pub mod layout;
pub mod notifications;
