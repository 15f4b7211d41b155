pub mod fake_meter;
pub mod header;
pub mod notice;
pub mod results_page;
pub mod upload_area;
pub mod upload_page;
