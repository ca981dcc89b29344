//! Mount API - terminal lifecycle and the render effect.
//!
//! `mount` owns the outer plumbing: raw mode, the alternate screen, the
//! frame derivation, and the ONE render effect. The caller supplies a
//! compose closure from dimensions to a frame; everything that closure
//! reads (reveals, gate view, blink phase, size signals) re-renders the
//! screen when it changes.
//!
//! The event loop is pull-based. Each `tick` polls input briefly, routes
//! it, and advances the timer wheel to wall-clock time, which fires any
//! reveal ticks that came due.
//!
//! # Example
//!
//! ```ignore
//! let (page, cleanup) = page(props);
//! let view = page.clone();
//! let handle = mount(move |w, h| compose_page(&view, w, h))?;
//!
//! run(&handle)?;  // Blocks until Ctrl+C or handle.stop()
//!
//! handle.unmount()?;
//! cleanup();
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::{derived, effect};

use crate::render::{DiffRenderer, Frame};
use crate::state::clock::advance_to;
use crate::state::{on_key, poll_event, route_event};
use super::terminal::{detect_terminal_size, terminal_height, terminal_width};

/// How long one tick waits for input before advancing time (~60fps).
const POLL_INTERVAL: Duration = Duration::from_millis(16);

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by mount() that allows unmounting.
///
/// Holds references to:
/// - The render effect stop function
/// - The ctrl+c handler cleanup
/// - The renderer (for leaving the alternate screen)
/// - The running flag (set to false on Ctrl+C or stop)
pub struct MountHandle {
    stop_effect: Option<Box<dyn FnOnce()>>,
    key_cleanup: Option<Box<dyn FnOnce()>>,
    renderer: Rc<RefCell<DiffRenderer>>,
    running: Arc<AtomicBool>,
    epoch: Instant,
}

impl MountHandle {
    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the application (sets running to false).
    /// Use this to trigger graceful shutdown from custom code.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Stop the render effect and restore the terminal.
    ///
    /// This will:
    /// 1. Set running to false
    /// 2. Stop the render effect
    /// 3. Unregister the ctrl+c handler
    /// 4. Leave the alternate screen and disable raw mode
    pub fn unmount(mut self) -> io::Result<()> {
        self.teardown()
    }

    fn teardown(&mut self) -> io::Result<()> {
        self.stop();

        if let Some(stop) = self.stop_effect.take() {
            stop();
        }
        if let Some(cleanup) = self.key_cleanup.take() {
            cleanup();
        }

        let screen = self.renderer.borrow_mut().exit_fullscreen();
        let raw = disable_raw_mode();
        screen?;
        raw?;
        Ok(())
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Restore the terminal on drop (best effort)
        if self.stop_effect.is_some() || self.key_cleanup.is_some() {
            let _ = self.teardown();
        }
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount a compose closure onto the terminal.
///
/// This sets up:
/// 1. Terminal size detection
/// 2. Raw mode and the alternate screen
/// 3. The reactive pipeline (size signals -> frame derived -> renderer)
/// 4. A ctrl+c handler for shutdown
///
/// The caller keeps ownership of the page and its cleanup; `mount` only
/// owns the rendering side.
///
/// Returns a MountHandle for the event loop and cleanup.
pub fn mount(compose: impl Fn(u16, u16) -> Frame + 'static) -> io::Result<MountHandle> {
    detect_terminal_size()?;
    enable_raw_mode()?;

    let renderer = Rc::new(RefCell::new(DiffRenderer::new()));
    if let Err(err) = renderer.borrow_mut().enter_fullscreen() {
        let _ = disable_raw_mode();
        return Err(err);
    }

    let running = Arc::new(AtomicBool::new(true));

    // Create the reactive pipeline
    let width = terminal_width();
    let height = terminal_height();
    let frame = derived(move || compose(width.get(), height.get()));

    // Create the ONE render effect
    let running_for_effect = running.clone();
    let renderer_for_effect = renderer.clone();
    let stop_effect = effect(move || {
        if !running_for_effect.load(Ordering::SeqCst) {
            return;
        }

        // Read from derived (creates dependency)
        let frame = frame.get();

        // Render to terminal (side effect!)
        let _ = renderer_for_effect.borrow_mut().render(&frame);
    });

    // Ctrl+C requests shutdown; the loop notices on its next tick
    let running_for_quit = running.clone();
    let key_cleanup = on_key("ctrl+c", move || {
        running_for_quit.store(false, Ordering::SeqCst);
        true
    });

    Ok(MountHandle {
        stop_effect: Some(Box::new(stop_effect)),
        key_cleanup: Some(Box::new(key_cleanup)),
        renderer,
        running,
        epoch: Instant::now(),
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) -> io::Result<()> {
    handle.unmount()
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking).
///
/// Polls input with a short timeout, routes whatever arrived, then
/// advances the timer wheel to wall-clock time so due reveal ticks fire.
///
/// # Returns
///
/// * `Ok(true)` - Continue running
/// * `Ok(false)` - Stop requested (Ctrl+C pressed or `handle.stop()` called)
/// * `Err(e)` - I/O error while polling
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if let Some(event) = poll_event(POLL_INTERVAL)? {
        route_event(event);
    }
    advance_to(handle.epoch.elapsed().as_millis() as u64);

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
///
/// Blocks until Ctrl+C is pressed or `handle.stop()` is called from a
/// key handler.
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}
