//! Virtual keyboard on /dev/uinput

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::os::unix::io::{AsRawFd, RawFd};
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use super::ioctl::{
    ioctl_no_arg, ioctl_with_int_arg, ioctl_with_ref_arg, UI_DEV_CREATE, UI_DEV_DESTROY,
    UI_DEV_SETUP, UI_SET_EVBIT, UI_SET_KEYBIT,
};
use super::{EventSink, SinkError};
use crate::input::event::{EV_KEY, EV_SYN};
use crate::input::keycodes::{KEY_MAX, KEY_RESERVED};
use crate::input::InputEvent;

/// Default uinput control node
pub const UINPUT_PATH: &str = "/dev/uinput";

/// Name the virtual keyboard registers with
pub const DEVICE_NAME: &str = "uinputd-virtual-keyboard";

const BUS_VIRTUAL: u16 = 0x06;
const VENDOR_ID: u16 = 0x1234;
const PRODUCT_ID: u16 = 0x5678;
const VERSION: u16 = 1;

const UINPUT_MAX_NAME_SIZE: usize = 80;

/// struct input_id
#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
struct InputId {
    bustype: u16,
    vendor: u16,
    product: u16,
    version: u16,
}

/// struct uinput_setup
#[repr(C)]
struct UinputSetup {
    id: InputId,
    name: [u8; UINPUT_MAX_NAME_SIZE],
    ff_effects_max: u32,
}

impl UinputSetup {
    fn new(name: &str) -> Self {
        let mut buf = [0u8; UINPUT_MAX_NAME_SIZE];
        // Keep the trailing NUL
        let len = name.len().min(UINPUT_MAX_NAME_SIZE - 1);
        buf[..len].copy_from_slice(&name.as_bytes()[..len]);
        Self {
            id: InputId {
                bustype: BUS_VIRTUAL,
                vendor: VENDOR_ID,
                product: PRODUCT_ID,
                version: VERSION,
            },
            name: buf,
            ff_effects_max: 0,
        }
    }
}

/// Virtual keyboard device
///
/// Created on open, destroyed on drop.
#[derive(Debug)]
pub struct UinputDevice {
    file: Option<File>,
}

impl UinputDevice {
    /// Create the virtual keyboard on /dev/uinput
    pub fn open() -> Result<Self> {
        Self::open_path(Path::new(UINPUT_PATH))
    }

    pub fn open_path(path: &Path) -> Result<Self> {
        info!("Creating virtual keyboard {:?} on {:?}", DEVICE_NAME, path);

        let file = OpenOptions::new()
            .write(true)
            .custom_flags(libc::O_NONBLOCK)
            .open(path)
            .with_context(|| format!("Failed to open {:?} (do you have permissions?)", path))?;

        let fd = file.as_raw_fd();
        let device = Self { file: Some(file) };
        // On error the partially set up device is dropped, closing the fd
        setup(fd).context("uinput device setup failed")?;

        info!("Virtual keyboard created");
        Ok(device)
    }

    /// Destroy the device and close the fd
    pub fn close(&mut self) {
        if let Some(file) = self.file.take() {
            if let Err(e) = ioctl_no_arg(file.as_raw_fd(), UI_DEV_DESTROY, "UI_DEV_DESTROY") {
                warn!("{}", e);
            }
            debug!("Virtual keyboard destroyed");
        }
    }
}

fn setup(fd: RawFd) -> Result<()> {
    ioctl_with_int_arg(fd, UI_SET_EVBIT, EV_KEY as libc::c_int, "UI_SET_EVBIT(EV_KEY)")?;
    ioctl_with_int_arg(fd, UI_SET_EVBIT, EV_SYN as libc::c_int, "UI_SET_EVBIT(EV_SYN)")?;

    // Some kernels reject individual codes; keep going
    for code in KEY_RESERVED..=KEY_MAX {
        if let Err(e) = ioctl_with_int_arg(fd, UI_SET_KEYBIT, code as libc::c_int, "UI_SET_KEYBIT") {
            debug!("Key {} not enabled: {}", code, e);
        }
    }

    let setup = UinputSetup::new(DEVICE_NAME);
    ioctl_with_ref_arg(fd, UI_DEV_SETUP, &setup, "UI_DEV_SETUP")?;
    ioctl_no_arg(fd, UI_DEV_CREATE, "UI_DEV_CREATE")?;
    Ok(())
}

impl EventSink for UinputDevice {
    fn write_event(&mut self, event: &InputEvent) -> Result<(), SinkError> {
        let file = self.file.as_mut().ok_or(SinkError::Closed)?;
        let bytes = event.to_bytes();
        let written = file.write(&bytes)?;
        if written != bytes.len() {
            return Err(SinkError::ShortWrite {
                written,
                expected: bytes.len(),
            });
        }
        Ok(())
    }
}

impl Drop for UinputDevice {
    fn drop(&mut self) {
        self.close();
    }
}
