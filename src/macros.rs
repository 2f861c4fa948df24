#[allow(dead_code)]
pub enum LogType {
    Info,
    Debug,
    Error,
    Trace,
}

/// Prints out the provided message through a logger controlled by the logtype param.
///
/// # Example
///
/// ```ignore
/// show_message!("Hello!", LogType::Info);
/// ```
#[macro_export]
macro_rules! show_message {
    ($msg: expr, $logtype: expr) => {
        match $logtype {
            $crate::macros::LogType::Info => log::info!("{}", $msg),
            $crate::macros::LogType::Debug => log::debug!("{}", $msg),
            $crate::macros::LogType::Error => log::error!("{}", $msg),
            $crate::macros::LogType::Trace => log::trace!("{}", $msg),
        }
    };
}

/// Measures the time duration of the provided function and prints out the message
/// through a logger controlled by the logtype param (debug when omitted).
///
/// # Example
///
/// ```ignore
/// let split = measure_time!("reading training split", || read_split(dir, layout, 0, options));
/// ```
#[macro_export]
macro_rules! measure_time {
    ($msg: expr, $fn: expr) => {
        $crate::measure_time!($msg, $fn, $crate::macros::LogType::Debug)
    };
    ($msg: expr, $fn: expr, $logtype: expr) => {{
        let instant = std::time::Instant::now();
        let res = $fn();
        $crate::show_message!(
            format!(
                "Finished \"{}\" in {} ms",
                $msg,
                instant.elapsed().as_millis(),
            ),
            $logtype
        );
        res
    }};
}
