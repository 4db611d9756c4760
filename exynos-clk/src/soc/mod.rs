use crate::{cmu::Cmu, of::OfClockDeclare};

cfg_if::cfg_if! {
    if #[cfg(feature = "exynos3475")] {
        pub mod exynos3475;
        pub use self::exynos3475 as chip;

        /// CMU blocks of the selected chip.
        pub static CMUS: &[&Cmu] = chip::CMUS;
        /// Device-tree declarations of the selected chip's clock providers.
        pub static CLOCK_DECLARES: &[OfClockDeclare] = chip::CLOCK_DECLARES;
        /// Clocks the tables reference but do not define.
        pub static EXTERNAL_CLOCKS: &[&str] = chip::EXTERNAL_CLOCKS;
    } else {
        pub static CMUS: &[&Cmu] = &[];
        pub static CLOCK_DECLARES: &[OfClockDeclare] = &[];
        pub static EXTERNAL_CLOCKS: &[&str] = &[];
    }
}
