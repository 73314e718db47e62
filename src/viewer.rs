use std::thread;
use std::time::Duration;

use minifb::{Window, WindowOptions};
use tracing::{debug, info};

use crate::error::ViewerError;
use crate::private::Bitmap;

/// How long the viewer sleeps between polls of the window's event queue.
pub const POLL_INTERVAL: Duration = Duration::from_millis(400);

/// A fixed-size window that shows one finished frame.
///
/// The platform window is released when the viewer is dropped.
pub struct Viewer {
    window: Window,
    width: usize,
    height: usize,
    buffer: Vec<u32>,
}

impl Viewer {
    pub fn open(title: &str, width: usize, height: usize) -> Result<Viewer, ViewerError> {
        let window = Window::new(title, width, height, WindowOptions::default()).map_err(|e| {
            ViewerError::Create {
                width: width,
                height: height,
                message: e.to_string(),
            }
        })?;

        debug!(title, width, height, "window created");
        Ok(Viewer {
            window: window,
            width: width,
            height: height,
            buffer: Vec::with_capacity(width * height),
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Uploads `frame` and pumps pending window events.
    pub fn present(&mut self, frame: &Bitmap) -> Result<(), ViewerError> {
        if frame.size() != (self.width, self.height) {
            return Err(ViewerError::Present(format!(
                "frame is {:?} but the window is {}x{}",
                frame.size(),
                self.width,
                self.height
            )));
        }

        frame.write_rgb_buffer(&mut self.buffer);
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|e| ViewerError::Present(e.to_string()))
    }

    /// Keeps `frame` on screen until the user closes the window.
    pub fn run_until_closed(mut self, frame: &Bitmap) -> Result<(), ViewerError> {
        self.present(frame)?;
        while self.is_open() {
            thread::sleep(POLL_INTERVAL);
            self.present(frame)?;
        }
        info!("clean shutdown");
        Ok(())
    }
}
