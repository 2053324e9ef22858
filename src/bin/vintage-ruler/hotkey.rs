//! System-wide hotkey that toggles the ruler's visibility.

use eframe::egui;
use global_hotkey::hotkey::{Code, HotKey, Modifiers};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState};
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Human readable form of the hotkey, for hints in the UI.
pub const HOTKEY_LABEL: &str = "Ctrl+Shift+R";

/// Listens for the visibility hotkey while the app is running.
pub struct VisibilityHotkey {
    /// Receiver for presses forwarded from the hotkey event handler
    press_rx: Receiver<()>,
    /// The manager must be kept alive for the hotkey to stay registered
    _manager: GlobalHotKeyManager,
}

impl VisibilityHotkey {
    /// Registers the hotkey.
    ///
    /// Returns `None` if the platform refuses the registration (e.g. another
    /// application already owns the combination).
    pub fn new(ctx: egui::Context) -> Option<Self> {
        let manager = match GlobalHotKeyManager::new() {
            Ok(manager) => manager,
            Err(err) => {
                log::warn!("Global hotkeys unavailable: {err}");
                return None;
            }
        };

        let hotkey = HotKey::new(Some(Modifiers::CONTROL | Modifiers::SHIFT), Code::KeyR);
        let hotkey_id = hotkey.id();
        if let Err(err) = manager.register(hotkey) {
            log::warn!("Failed to register {HOTKEY_LABEL}: {err}");
            return None;
        }

        let (press_tx, press_rx) = mpsc::channel();

        // Events arrive off the UI loop; forward presses and wake the app up
        GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
            if event.id == hotkey_id && matches!(event.state, HotKeyState::Pressed) {
                let _ = press_tx.send(());
                ctx.request_repaint();
            }
        }));

        log::info!("Registered global hotkey {HOTKEY_LABEL}");

        Some(Self {
            press_rx,
            _manager: manager,
        })
    }

    /// Drains pending presses and returns how many arrived since the last poll.
    pub fn poll(&self) -> usize {
        let mut presses = 0;
        loop {
            match self.press_rx.try_recv() {
                Ok(()) => presses += 1,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Hotkey channel disconnected");
                    break;
                }
            }
        }
        presses
    }
}
