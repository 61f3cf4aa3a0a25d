mod show;

pub use self::show::*;
