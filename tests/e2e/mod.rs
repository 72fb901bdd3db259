use std::io;
use std::process::Command;
use std::time::{Duration, Instant};

/// Drives the built binary inside a detached tmux session so key presses
/// and screen captures go through a real pty.
pub struct TmuxHarness {
    session: String,
}

impl TmuxHarness {
    pub fn new(name: &str) -> Self {
        // Unique per test process so parallel test runs don't collide.
        let session = format!("haptic-e2e-{}-{}", name, std::process::id());
        Self { session }
    }

    pub fn start(&self, binary: &str) -> io::Result<()> {
        let status = Command::new("tmux")
            .args([
                "new-session",
                "-d",
                "-s",
                &self.session,
                "-x",
                "100",
                "-y",
                "30",
                binary,
            ])
            .status()?;
        if !status.success() {
            return Err(io::Error::new(io::ErrorKind::Other,"tmux new-session failed"));
        }
        Ok(())
    }

    pub fn send_key(&self, key: &str) -> io::Result<()> {
        let status = Command::new("tmux")
            .args(["send-keys", "-t", &self.session, key])
            .status()?;
        if !status.success() {
            return Err(io::Error::new(io::ErrorKind::Other,"tmux send-keys failed"));
        }
        Ok(())
    }

    pub fn capture_screen(&self) -> io::Result<String> {
        let output = Command::new("tmux")
            .args(["capture-pane", "-p", "-t", &self.session])
            .output()?;
        if !output.status.success() {
            return Err(io::Error::new(io::ErrorKind::Other,"tmux capture-pane failed"));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    pub fn assert_screen_contains(&self, text: &str) -> Result<(), String> {
        let screen = self.capture_screen().map_err(|e| e.to_string())?;
        if screen.contains(text) {
            Ok(())
        } else {
            Err(format!("'{}' not found on screen:\n{}", text, screen))
        }
    }

    pub fn is_running(&self) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", &self.session])
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    pub fn wait_for_exit(&self, timeout: Duration) -> Result<(), String> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if !self.is_running() {
                return Ok(());
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        Err("app did not exit within timeout".to_string())
    }
}

impl Drop for TmuxHarness {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .args(["kill-session", "-t", &self.session])
            .output();
    }
}
