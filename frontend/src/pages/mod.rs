pub mod add_school;
pub mod home;
