/*
 * Inputs and the queue between the edge handlers and the owning task.
 *
 * An edge handler only maps its line to an `Input` and pushes it onto a
 * bounded channel; it never blocks and never touches the mode or the lights.
 * All the logic runs in the task that owns the traffic light, see
 * `Dispatcher`.
 */

use embassy_sync::{
    blocking_mutex::raw::RawMutex,
    channel::{Channel, TryReceiveError, TrySendError},
};

use crate::lights::Composite;

pub const INPUT_LINES: usize = 5;
pub const QUEUE_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Red,
    Yellow,
    Green,
}

impl From<Color> for Composite {
    fn from(color: Color) -> Self {
        match color {
            Color::Red => Composite::Red,
            Color::Yellow => Composite::Yellow,
            Color::Green => Composite::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    PauseResume,
    Force(Color),
    ToggleBlink,
}

impl Input {
    pub const fn from_line(line: u8) -> Option<Input> {
        match line {
            0 => Some(Input::PauseResume),
            1 => Some(Input::Force(Color::Red)),
            2 => Some(Input::Force(Color::Yellow)),
            3 => Some(Input::Force(Color::Green)),
            4 => Some(Input::ToggleBlink),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    UnknownLine(u8),
    /// The owning task is behind; the press was dropped.
    QueueFull(Input),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::UnknownLine(line) => write!(f, "no input on line {}", line),
            InputError::QueueFull(input) => write!(f, "input queue full, dropped {:?}", input),
        }
    }
}

pub struct InputQueue<M: RawMutex> {
    channel: Channel<M, Input, QUEUE_CAPACITY>,
}

impl<M: RawMutex> InputQueue<M> {
    pub const fn new() -> Self {
        InputQueue {
            channel: Channel::new(),
        }
    }

    /// The edge handler body for `line`.
    pub fn on_rising_edge(&self, line: u8) -> Result<(), InputError> {
        let input = Input::from_line(line).ok_or(InputError::UnknownLine(line))?;
        self.submit(input)
    }

    pub fn submit(&self, input: Input) -> Result<(), InputError> {
        self.channel.try_send(input).map_err(|e| match e {
            TrySendError::Full(input) => InputError::QueueFull(input),
        })
    }

    pub async fn receive(&self) -> Input {
        self.channel.receive().await
    }

    pub fn try_receive(&self) -> Option<Input> {
        match self.channel.try_receive() {
            Ok(input) => Some(input),
            Err(TryReceiveError::Empty) => None,
        }
    }
}

impl<M: RawMutex> Default for InputQueue<M> {
    fn default() -> Self {
        InputQueue::new()
    }
}
