pub mod header;
pub mod toolbar;
pub mod search_box;
pub mod guest_list;
