pub mod freecurrencyapi;
pub mod util;

pub use freecurrencyapi::FreeCurrencyApiProvider;
