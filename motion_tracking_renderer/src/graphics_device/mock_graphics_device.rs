/// Mock graphics device for unit tests (no GPU required)
///
/// Records every call into a shared command log so tests can keep a clone
/// of the device after boxing it into the renderer. Errors can be queued
/// directly or armed to fire after the n-th draw.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use glam::Mat4;
use crate::error::{Error, Result};
use crate::graphics_device::{
    GraphicsDevice, Buffer, BufferDesc, BufferUsage, Color, Viewport, ClearFlags,
    DrawDesc, PrimitiveTopology,
};
use crate::engine_bail;

// ============================================================================
// Recorded commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum MockCommand {
    SetClearColor(Color),
    SetDepthTest(bool),
    SetViewport(Viewport),
    Clear(ClearFlags),
    CreateBuffer { size: u64, usage: BufferUsage },
    UpdateBuffer { offset: u64, len: usize },
    Draw {
        label: &'static str,
        topology: PrimitiveTopology,
        vertex_count: u32,
        mvp: Mat4,
        line_width: f32,
    },
}

#[derive(Debug, Default)]
pub struct MockState {
    pub commands: Vec<MockCommand>,
    pub pending_errors: VecDeque<u32>,
    pub fail_buffer_allocation: bool,
    /// (draw index, error code): raise `code` right after that draw
    pub error_after_draw: Option<(usize, u32)>,
    pub draw_count: usize,
}

// ============================================================================
// Mock Buffer
// ============================================================================

#[derive(Debug)]
pub struct MockBuffer {
    pub size: u64,
    state: Arc<Mutex<MockState>>,
}

impl Buffer for MockBuffer {
    fn update(&self, offset: u64, data: &[u8]) -> Result<()> {
        if offset + data.len() as u64 > self.size {
            engine_bail!("mtrack::mock",
                "buffer update out of range: {} + {} > {}", offset, data.len(), self.size);
        }
        self.state.lock().unwrap().commands.push(MockCommand::UpdateBuffer {
            offset,
            len: data.len(),
        });
        Ok(())
    }

    fn size(&self) -> u64 {
        self.size
    }
}

// ============================================================================
// Mock GraphicsDevice
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MockGraphicsDevice {
    pub state: Arc<Mutex<MockState>>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the command log
    pub fn commands(&self) -> Vec<MockCommand> {
        self.state.lock().unwrap().commands.clone()
    }

    /// Labels of the draw calls, in order
    pub fn draw_labels(&self) -> Vec<&'static str> {
        self.commands()
            .into_iter()
            .filter_map(|cmd| match cmd {
                MockCommand::Draw { label, .. } => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn clear_commands(&self) {
        self.state.lock().unwrap().commands.clear();
    }

    /// Queue an error for the next `poll_error()`
    pub fn push_error(&self, code: u32) {
        self.state.lock().unwrap().pending_errors.push_back(code);
    }

    /// Raise `code` right after draw number `draw_index` (0-based, counted
    /// from now)
    pub fn fail_after_draw(&self, draw_index: usize, code: u32) {
        let mut state = self.state.lock().unwrap();
        let absolute = state.draw_count + draw_index;
        state.error_after_draw = Some((absolute, code));
    }

    pub fn set_fail_buffer_allocation(&self, fail: bool) {
        self.state.lock().unwrap().fail_buffer_allocation = fail;
    }

    fn record(&self, command: MockCommand) {
        self.state.lock().unwrap().commands.push(command);
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn set_clear_color(&mut self, color: Color) {
        self.record(MockCommand::SetClearColor(color));
    }

    fn set_depth_test(&mut self, enabled: bool) {
        self.record(MockCommand::SetDepthTest(enabled));
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.record(MockCommand::SetViewport(viewport));
    }

    fn clear(&mut self, flags: ClearFlags) {
        self.record(MockCommand::Clear(flags));
    }

    fn create_buffer(&mut self, desc: &BufferDesc) -> Result<Arc<dyn Buffer>> {
        let mut state = self.state.lock().unwrap();
        if state.fail_buffer_allocation {
            return Err(Error::OutOfMemory);
        }
        state.commands.push(MockCommand::CreateBuffer { size: desc.size, usage: desc.usage });
        Ok(Arc::new(MockBuffer { size: desc.size, state: self.state.clone() }))
    }

    fn draw(&mut self, desc: &DrawDesc<'_>) {
        let mut state = self.state.lock().unwrap();
        state.commands.push(MockCommand::Draw {
            label: desc.label,
            topology: desc.topology,
            vertex_count: desc.vertex_count,
            mvp: desc.mvp,
            line_width: desc.line_width,
        });
        if let Some((index, code)) = state.error_after_draw {
            if index == state.draw_count {
                state.pending_errors.push_back(code);
                state.error_after_draw = None;
            }
        }
        state.draw_count += 1;
    }

    fn poll_error(&mut self) -> Option<u32> {
        self.state.lock().unwrap().pending_errors.pop_front()
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
