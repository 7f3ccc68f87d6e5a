pub mod header;
pub mod school_card;
