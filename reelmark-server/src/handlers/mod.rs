pub mod favorites;
pub mod folders;
pub mod marks;
