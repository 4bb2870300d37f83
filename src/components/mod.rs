pub mod item_list;
pub mod review_form;
pub mod review_list;
pub mod review_stats;
