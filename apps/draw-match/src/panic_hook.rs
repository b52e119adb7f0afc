//! Process-wide panic policy for the binaries.

/// Abort the process after the default hook has printed the panic.
///
/// [`crate::Game::play`] already unblocks the surviving threads when one of
/// them panics, but a binary has no use for a half-played game and should
/// not wait on the rest to unwind.
pub fn abort_on_panic() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        default_hook(panic_info);
        std::process::abort();
    }));
}
