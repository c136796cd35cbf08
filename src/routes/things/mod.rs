pub mod create;
pub mod index;
pub mod new;
