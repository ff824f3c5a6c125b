//! Exit handling: signal handlers, terminal cleanup and the fatal RNG path.

use std::io::Write;

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit; restores colours and the cursor on any exit.
extern "C" fn cleanup_on_exit() {
    reset_terminal_termios();
    unsafe {
        if libc::isatty(1) == 1 {
            let reset = b"\x1b[0m\x1b[?25h";
            libc::write(1, reset.as_ptr() as *const libc::c_void, reset.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: leave mid-reveal without a half-styled terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Install signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep core dumps (and ptrace from unprivileged peers) away from generated passwords.
#[cfg(target_os = "linux")]
pub fn disable_core_dumps() {
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

#[cfg(not(target_os = "linux"))]
pub fn disable_core_dumps() {}

/// Reset terminal state (public for use in other modules)
pub fn reset_terminal() {
    reset_terminal_termios();
}

/// The OS random source failed. Never continue without real entropy.
#[cold]
#[inline(never)]
pub fn rng_failure(err: getrandom::Error) -> ! {
    log::error!("secure random source failed: {err}");
    let _ = writeln!(
        std::io::stderr(),
        "Error generating random number: {err}. Aborting."
    );
    std::process::abort()
}
