pub mod bubble;
