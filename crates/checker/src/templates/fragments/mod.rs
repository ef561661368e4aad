mod report_card;

pub use report_card::{error_notice, report_card};
