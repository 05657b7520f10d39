#![macro_use]
#![allow(unused_macros)]

// Forwards to `log` or `defmt` depending on the enabled feature, compiles to
// nothing when neither is enabled. Unit tests always go through `log`.

macro_rules! log_trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(any(feature = "log", test))]
            ::log::trace!($s $(, $x)*);

            #[cfg(feature = "defmt")]
            ::defmt::trace!($s $(, $x)*);

            #[cfg(not(any(feature = "log", feature = "defmt", test)))]
            let _ = ($(&$x,)*);
        }
    };
}

macro_rules! log_debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(any(feature = "log", test))]
            ::log::debug!($s $(, $x)*);

            #[cfg(feature = "defmt")]
            ::defmt::debug!($s $(, $x)*);

            #[cfg(not(any(feature = "log", feature = "defmt", test)))]
            let _ = ($(&$x,)*);
        }
    };
}

macro_rules! log_warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(any(feature = "log", test))]
            ::log::warn!($s $(, $x)*);

            #[cfg(feature = "defmt")]
            ::defmt::warn!($s $(, $x)*);

            #[cfg(not(any(feature = "log", feature = "defmt", test)))]
            let _ = ($(&$x,)*);
        }
    };
}
