//! uinput ioctl wrappers
//!
//! Thin error-reporting wrappers around `libc::ioctl` for the handful of
//! uinput requests the virtual keyboard needs.

use anyhow::{anyhow, Result};
use std::os::unix::io::RawFd;

// Request numbers from <linux/uinput.h>
pub const UI_DEV_CREATE: libc::c_ulong = 0x5501;
pub const UI_DEV_DESTROY: libc::c_ulong = 0x5502;
/// _IOW('U', 3, struct uinput_setup)
pub const UI_DEV_SETUP: libc::c_ulong = 0x405c_5503;
/// _IOW('U', 100, int)
pub const UI_SET_EVBIT: libc::c_ulong = 0x4004_5564;
/// _IOW('U', 101, int)
pub const UI_SET_KEYBIT: libc::c_ulong = 0x4004_5565;

/// Execute an ioctl request that takes no argument.
///
/// # Arguments
/// * `fd` - Open uinput file descriptor
/// * `cmd` - ioctl request number
/// * `cmd_name` - Human-readable name for error messages
pub fn ioctl_no_arg(fd: RawFd, cmd: libc::c_ulong, cmd_name: &str) -> Result<()> {
    let ret = unsafe { libc::ioctl(fd, cmd as _) };
    check(ret, fd, cmd_name)
}

/// Execute an ioctl request with an integer argument.
pub fn ioctl_with_int_arg(
    fd: RawFd,
    cmd: libc::c_ulong,
    arg: libc::c_int,
    cmd_name: &str,
) -> Result<()> {
    let ret = unsafe { libc::ioctl(fd, cmd as _, arg) };
    check(ret, fd, cmd_name)
}

/// Execute an ioctl request with a struct passed by reference.
///
/// The caller must ensure `T` matches the layout the request expects.
pub fn ioctl_with_ref_arg<T>(fd: RawFd, cmd: libc::c_ulong, arg: &T, cmd_name: &str) -> Result<()> {
    let ret = unsafe { libc::ioctl(fd, cmd as _, arg as *const T) };
    check(ret, fd, cmd_name)
}

fn check(ret: libc::c_int, fd: RawFd, cmd_name: &str) -> Result<()> {
    if ret < 0 {
        Err(anyhow!(
            "{} failed on fd {}: {}",
            cmd_name,
            fd,
            std::io::Error::last_os_error()
        ))
    } else {
        Ok(())
    }
}
