//! Scripted board used by unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::coords::{Vec2i, Vec3f};
use crate::device::{ButtonInput, ImuError, ImuInput, Panel, PresentError, TouchInput};
use crate::display::DisplayBuffer;
use crate::imu::InertialSample;
use crate::input::{ButtonId, TouchSample};
use crate::paint::Rgb565;
use crate::time::Clock;

/// Collaborator calls, in the order the board saw them.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum BoardEvent {
    Present,
    Sleep(u32),
    Button(ButtonId),
    ImuRead,
    TouchEnabled,
    TouchRead,
}

/// Board whose clock only moves when a test (or a sleep) moves it.
pub(crate) struct MockBoard {
    pub now: u32,
    /// Time spent outside the board, added to every clock read. Shared so an
    /// app closure can charge its own drawing time.
    pub app_time: Rc<Cell<u32>>,
    pub size: (u16, u16),
    /// Clock advance charged to each present.
    pub present_cost_ms: u32,
    /// When false, sleeps are recorded but the clock stays put.
    pub sleep_advances: bool,
    pub present_error: Option<PresentError>,
    pub buttons: [bool; 3],
    pub touch_enabled: bool,
    pub touch: TouchSample,
    pub imu: Result<InertialSample, ImuError>,
    pub events: Vec<BoardEvent>,
    pub frames: Vec<Vec<Rgb565>>,
}

impl MockBoard {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            now: 0,
            app_time: Rc::new(Cell::new(0)),
            size: (width, height),
            present_cost_ms: 0,
            sleep_advances: true,
            present_error: None,
            buttons: [false; 3],
            touch_enabled: true,
            touch: TouchSample::default(),
            imu: Ok(InertialSample::new(Vec3f::new(0.0, 0.0, 1.0), Vec3f::zero())),
            events: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub fn presents(&self) -> usize {
        self.frames.len()
    }

    pub fn count(&self, event: BoardEvent) -> usize {
        self.events.iter().filter(|&&e| e == event).count()
    }
}

impl Clock for MockBoard {
    fn now_ms(&self) -> u32 {
        self.now.wrapping_add(self.app_time.get())
    }

    fn sleep_ms(&mut self, ms: u32) {
        self.events.push(BoardEvent::Sleep(ms));
        if self.sleep_advances {
            self.now = self.now.wrapping_add(ms);
        }
    }
}

impl Panel for MockBoard {
    fn size(&self) -> (u16, u16) {
        self.size
    }

    fn present(&mut self, buffer: &DisplayBuffer, origin: Vec2i) -> Result<(), PresentError> {
        assert_eq!(origin, Vec2i::zero());
        if let Some(err) = self.present_error {
            return Err(err);
        }
        self.events.push(BoardEvent::Present);
        self.frames.push(buffer.pixels().to_vec());
        self.now = self.now.wrapping_add(self.present_cost_ms);
        Ok(())
    }
}

impl ButtonInput for MockBoard {
    fn button_level(&mut self, id: ButtonId) -> bool {
        self.events.push(BoardEvent::Button(id));
        self.buttons[id.index()]
    }
}

impl TouchInput for MockBoard {
    fn touch_enabled(&mut self) -> bool {
        self.events.push(BoardEvent::TouchEnabled);
        self.touch_enabled
    }

    fn read_touch(&mut self) -> TouchSample {
        self.events.push(BoardEvent::TouchRead);
        self.touch
    }
}

impl ImuInput for MockBoard {
    fn read_imu(&mut self) -> Result<InertialSample, ImuError> {
        self.events.push(BoardEvent::ImuRead);
        self.imu
    }
}
