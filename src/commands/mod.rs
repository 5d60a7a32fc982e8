pub mod add;
pub mod due;
pub mod list;
pub mod menu;
pub mod remind;
