use log::Level::Trace;
use log::{log_enabled, trace};

use crate::{util, LABEL, LOG_TARGET};
use std::fmt::Debug;

/// Trace records for a parse step, laid out in columns: the input being parsed, the
/// active debug label, the operation, and its outcome.
pub(crate) trait Loggable {
    const LABEL_WIDTH: usize = 15;
    const INPUT_WIDTH: usize = 35;
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args);
    fn log_success<Args: Debug, Res: Debug>(&self, msg: &str, args: Args, res: Res);
    fn log_failure<Args: Debug, Error: Debug>(&self, msg: &str, args: Args, error: &Error);
}

impl Loggable for str {
    fn log_inputs<Args: Debug>(&self, msg: &str, args: Args) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self),
                operation = format!("{msg}({args:?})"),
            );
        }
    }

    fn log_success<Args: Debug, Res: Debug>(&self, msg: &str, args: Args, res: Res) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {res:?}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self),
                operation = format!("{msg}({args:?})"),
            );
        }
    }

    fn log_failure<Args: Debug, Error: Debug>(&self, msg: &str, args: Args, error: &Error) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {operation:<lw$} -> {e:?}",
                iw = Self::INPUT_WIDTH,
                lw = Self::LABEL_WIDTH,
                label = LABEL.with(|f| f.get()),
                inp = util::formatter_str(self),
                operation = format!("{msg}({args:?})"),
                e = error,
            );
        }
    }
}
