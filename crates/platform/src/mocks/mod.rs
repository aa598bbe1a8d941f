//! Mock implementations for testing
//!
//! Every mock created from the same [`Journal`] appends to one ordered event
//! log, so tests can assert the interleaving of bus accesses, GPIO edges and
//! delays across different collaborators. Mocks are cheap handles: clones
//! share state, so a test can keep a handle after moving the original into
//! a driver.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;
use std::vec::Vec;

use crate::{Direction, GpioLine, PinState, RegisterBus};

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// [`RegisterBus::write_bytes`]
    WriteBytes {
        /// Register offset
        addr: u32,
        /// Bytes written
        data: Vec<u8>,
    },
    /// [`RegisterBus::read_bytes`]
    ReadBytes {
        /// Register offset
        addr: u32,
        /// Number of bytes read
        len: usize,
    },
    /// [`RegisterBus::write_words`]
    WriteWords {
        /// Register offset
        addr: u32,
        /// Words written
        data: Vec<u32>,
    },
    /// [`RegisterBus::read_words`]
    ReadWords {
        /// Register offset
        addr: u32,
        /// Number of words read
        len: usize,
    },
    /// [`GpioLine::set_direction`]
    Direction {
        /// Line name given to [`Journal::line`]
        line: &'static str,
        /// Requested direction
        direction: Direction,
    },
    /// [`GpioLine::set_level`]
    SetLevel {
        /// Line name given to [`Journal::line`]
        line: &'static str,
        /// Driven level
        level: PinState,
    },
    /// [`GpioLine::level`]
    GetLevel {
        /// Line name given to [`Journal::line`]
        line: &'static str,
        /// Level returned to the caller
        level: PinState,
    },
    /// Any [`embedded_hal::delay::DelayNs`] call, normalised to nanoseconds.
    Delay {
        /// Requested duration
        ns: u64,
    },
}

/// Error returned by mocks switched into failing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockError {
    /// Bus access was not acknowledged
    Nack,
    /// GPIO controller rejected the access
    Line,
}

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Rc<RefCell<Vec<Event>>>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bus mock recording into this journal.
    pub fn bus(&self) -> MockBus {
        MockBus {
            journal: self.clone(),
            state: Rc::default(),
        }
    }

    /// Create a GPIO line mock recording into this journal under `name`.
    pub fn line(&self, name: &'static str) -> MockLine {
        MockLine {
            name,
            journal: self.clone(),
            state: Rc::default(),
        }
    }

    /// Create a delay mock recording into this journal.
    pub fn delay(&self) -> MockDelay {
        MockDelay {
            journal: self.clone(),
        }
    }

    /// Snapshot of all recorded events, oldest first.
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Events that touched the bus, oldest first.
    pub fn bus_events(&self) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|e| {
                matches!(
                    e,
                    Event::WriteBytes { .. }
                        | Event::ReadBytes { .. }
                        | Event::WriteWords { .. }
                        | Event::ReadWords { .. }
                )
            })
            .cloned()
            .collect()
    }

    /// Levels driven onto `line`, oldest first.
    pub fn levels_set(&self, line: &str) -> Vec<PinState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                Event::SetLevel { line: l, level } if *l == line => Some(*level),
                _ => None,
            })
            .collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Forget every recorded event.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Debug, Default)]
struct BusState {
    words: BTreeMap<u32, u32>,
    bytes: BTreeMap<u32, u8>,
    failing: bool,
}

/// Register bus mock.
///
/// Reads return preset values (zero when unset). Writes are journaled but
/// do not change what reads return, matching IP cores whose write and
/// readback paths are separate.
#[derive(Debug, Clone)]
pub struct MockBus {
    journal: Journal,
    state: Rc<RefCell<BusState>>,
}

impl MockBus {
    /// Preset the value returned by word reads at `addr`.
    pub fn set_word(&self, addr: u32, value: u32) {
        self.state.borrow_mut().words.insert(addr, value);
    }

    /// Preset the value returned by byte reads at `addr`.
    pub fn set_byte(&self, addr: u32, value: u8) {
        self.state.borrow_mut().bytes.insert(addr, value);
    }

    /// Make every subsequent access fail with [`MockError::Nack`].
    pub fn set_failing(&self, failing: bool) {
        self.state.borrow_mut().failing = failing;
    }

    fn check(&self) -> Result<(), MockError> {
        if self.state.borrow().failing {
            Err(MockError::Nack)
        } else {
            Ok(())
        }
    }
}

impl RegisterBus for MockBus {
    type Error = MockError;

    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Self::Error> {
        self.check()?;
        self.journal.record(Event::WriteBytes {
            addr,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read_bytes(&mut self, addr: u32, buffer: &mut [u8]) -> Result<(), Self::Error> {
        self.check()?;
        let state = self.state.borrow();
        for (offset, slot) in (0u32..).zip(buffer.iter_mut()) {
            *slot = state
                .bytes
                .get(&addr.wrapping_add(offset))
                .copied()
                .unwrap_or_default();
        }
        self.journal.record(Event::ReadBytes {
            addr,
            len: buffer.len(),
        });
        Ok(())
    }

    fn write_words(&mut self, addr: u32, data: &[u32]) -> Result<(), Self::Error> {
        self.check()?;
        self.journal.record(Event::WriteWords {
            addr,
            data: data.to_vec(),
        });
        Ok(())
    }

    fn read_words(&mut self, addr: u32, buffer: &mut [u32]) -> Result<(), Self::Error> {
        self.check()?;
        let state = self.state.borrow();
        for (index, slot) in (0u32..).zip(buffer.iter_mut()) {
            let word_addr = addr.wrapping_add(index.wrapping_mul(4));
            *slot = state.words.get(&word_addr).copied().unwrap_or_default();
        }
        self.journal.record(Event::ReadWords {
            addr,
            len: buffer.len(),
        });
        Ok(())
    }
}

#[derive(Debug)]
struct LineState {
    queued: VecDeque<PinState>,
    idle: PinState,
    failing: bool,
}

impl Default for LineState {
    fn default() -> Self {
        Self {
            queued: VecDeque::new(),
            idle: PinState::Low,
            failing: false,
        }
    }
}

/// GPIO line mock.
///
/// [`GpioLine::level`] pops queued levels first and falls back to the idle
/// level (low unless changed) once the queue is empty.
#[derive(Debug, Clone)]
pub struct MockLine {
    name: &'static str,
    journal: Journal,
    state: Rc<RefCell<LineState>>,
}

impl MockLine {
    /// Line name used in journal events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Queue levels to be returned by the next reads, in order.
    pub fn queue_levels(&self, levels: &[PinState]) {
        self.state.borrow_mut().queued.extend(levels.iter().copied());
    }

    /// Level returned once the queue is drained.
    pub fn set_idle(&self, level: PinState) {
        self.state.borrow_mut().idle = level;
    }

    /// Make every subsequent access fail with [`MockError::Line`].
    pub fn set_failing(&self, failing: bool) {
        self.state.borrow_mut().failing = failing;
    }

    fn check(&self) -> Result<(), MockError> {
        if self.state.borrow().failing {
            Err(MockError::Line)
        } else {
            Ok(())
        }
    }
}

impl GpioLine for MockLine {
    type Error = MockError;

    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error> {
        self.check()?;
        self.journal.record(Event::Direction {
            line: self.name,
            direction,
        });
        Ok(())
    }

    fn set_level(&mut self, level: PinState) -> Result<(), Self::Error> {
        self.check()?;
        self.journal.record(Event::SetLevel {
            line: self.name,
            level,
        });
        Ok(())
    }

    fn level(&mut self) -> Result<PinState, Self::Error> {
        self.check()?;
        let level = {
            let mut state = self.state.borrow_mut();
            let idle = state.idle;
            state.queued.pop_front().unwrap_or(idle)
        };
        self.journal.record(Event::GetLevel {
            line: self.name,
            level,
        });
        Ok(level)
    }
}

/// Delay mock; records the requested duration and returns immediately.
#[derive(Debug, Clone)]
pub struct MockDelay {
    journal: Journal,
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.journal.record(Event::Delay { ns: u64::from(ns) });
    }

    fn delay_us(&mut self, us: u32) {
        self.journal.record(Event::Delay {
            ns: u64::from(us).saturating_mul(1_000),
        });
    }

    fn delay_ms(&mut self, ms: u32) {
        self.journal.record(Event::Delay {
            ns: u64::from(ms).saturating_mul(1_000_000),
        });
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;

    #[test]
    fn test_journal_orders_events_across_mocks() {
        let journal = Journal::new();
        let mut bus = journal.bus();
        let mut line = journal.line("convst_a");
        let mut delay = journal.delay();

        line.set_high().unwrap();
        delay.delay_ms(1);
        bus.write_word(0x18, 0xC000_03FF).unwrap();

        assert_eq!(
            journal.events(),
            vec![
                Event::SetLevel {
                    line: "convst_a",
                    level: PinState::High
                },
                Event::Delay { ns: 1_000_000 },
                Event::WriteWords {
                    addr: 0x18,
                    data: vec![0xC000_03FF]
                },
            ]
        );
    }

    #[test]
    fn test_bus_reads_return_preset_values() {
        let journal = Journal::new();
        let mut bus = journal.bus();
        bus.set_word(0x24, 0x1234_FF78);
        bus.set_byte(0x10, 0x01);

        assert_eq!(bus.read_word(0x24).unwrap(), 0x1234_FF78);
        assert_eq!(bus.read_word(0x28).unwrap(), 0);

        let mut byte = [0u8; 2];
        bus.read_bytes(0x10, &mut byte).unwrap();
        assert_eq!(byte, [0x01, 0x00]);
    }

    #[test]
    fn test_bus_writes_do_not_change_reads() {
        let journal = Journal::new();
        let mut bus = journal.bus();
        bus.write_word(0x18, 0xDEAD_BEEF).unwrap();
        assert_eq!(bus.read_word(0x18).unwrap(), 0);
    }

    #[test]
    fn test_failing_bus_records_nothing() {
        let journal = Journal::new();
        let mut bus = journal.bus();
        bus.set_failing(true);
        assert_eq!(bus.write_byte(0x10, 1), Err(MockError::Nack));
        assert!(journal.is_empty());
    }

    #[test]
    fn test_line_queue_then_idle() {
        let journal = Journal::new();
        let mut busy = journal.line("busy");
        let handle = busy.clone();
        handle.queue_levels(&[PinState::High, PinState::High]);

        assert_eq!(busy.level().unwrap(), PinState::High);
        assert_eq!(busy.level().unwrap(), PinState::High);
        assert_eq!(busy.level().unwrap(), PinState::Low);

        handle.set_idle(PinState::High);
        assert_eq!(busy.level().unwrap(), PinState::High);
        assert_eq!(journal.len(), 4);
    }

    #[test]
    fn test_levels_set_filters_by_line() {
        let journal = Journal::new();
        let mut a = journal.line("a");
        let mut b = journal.line("b");
        a.set_low().unwrap();
        b.set_high().unwrap();
        a.set_high().unwrap();

        assert_eq!(journal.levels_set("a"), vec![PinState::Low, PinState::High]);
        assert_eq!(journal.levels_set("b"), vec![PinState::High]);
        assert!(journal.bus_events().is_empty());
    }
}
