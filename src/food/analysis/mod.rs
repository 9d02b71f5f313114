pub mod nutrition;
pub mod ring;

pub use nutrition::DailyTotals;
pub use ring::MacroRing;
