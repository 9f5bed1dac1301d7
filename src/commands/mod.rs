mod dump;
pub use dump::dump;
