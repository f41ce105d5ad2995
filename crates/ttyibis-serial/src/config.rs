use std::fmt;

#[cfg(unix)]
use rustix::termios::{ControlModes, OutputModes, SpecialCodeIndex, Termios};

/// Number of data bits per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    Seven,
    Eight,
}

/// Number of stop bits per character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One,
    Two,
}

/// Parity generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Flow control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    None,
    Hardware,
}

/// Line speeds supported by the termios speed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaudRate {
    B1200,
    B2400,
    B4800,
    B9600,
    B19200,
    B38400,
}

impl BaudRate {
    /// Bits per second.
    pub fn bps(self) -> u32 {
        match self {
            BaudRate::B1200 => 1200,
            BaudRate::B2400 => 2400,
            BaudRate::B4800 => 4800,
            BaudRate::B9600 => 9600,
            BaudRate::B19200 => 19200,
            BaudRate::B38400 => 38400,
        }
    }
}

/// Serial framing and timing for one transmission.
///
/// Built fresh for each send and applied as a read-modify-write over the
/// device's current settings. [`LinkConfig::ibis`] is the framing IBIS
/// equipment expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub data_bits: DataBits,
    pub stop_bits: StopBits,
    pub parity: Parity,
    pub flow_control: FlowControl,
    pub baud_rate: BaudRate,
    /// Minimum characters per read (`VMIN`). Only relevant once replies are read.
    pub vmin: u8,
    /// Inter-character read timeout in deciseconds (`VTIME`).
    pub vtime: u8,
}

impl LinkConfig {
    /// Default read timeout fields, kept for later reply handling.
    pub const DEFAULT_READ_TIMEOUT: u8 = 10;

    /// 1200 bps, 7E2, no handshake.
    pub fn ibis() -> Self {
        Self {
            data_bits: DataBits::Seven,
            stop_bits: StopBits::Two,
            parity: Parity::Even,
            flow_control: FlowControl::None,
            baud_rate: BaudRate::B1200,
            vmin: Self::DEFAULT_READ_TIMEOUT,
            vtime: Self::DEFAULT_READ_TIMEOUT,
        }
    }

    /// Rewrite `tty` in place so it carries this configuration.
    ///
    /// Puts the line in raw mode, disables output newline translation,
    /// sets character size, stop bits, parity and flow control, the read
    /// timeout fields and both line speeds. Everything else in `tty` is kept.
    #[cfg(unix)]
    pub fn apply(&self, tty: &mut Termios) -> std::io::Result<()> {
        tty.make_raw();

        tty.output_modes -= OutputModes::ONLCR | OutputModes::OCRNL;
        tty.control_modes -= ControlModes::CSIZE | ControlModes::CRTSCTS;
        tty.control_modes |= ControlModes::CREAD | ControlModes::CLOCAL;

        tty.control_modes |= match self.data_bits {
            DataBits::Seven => ControlModes::CS7,
            DataBits::Eight => ControlModes::CS8,
        };

        tty.control_modes
            .set(ControlModes::CSTOPB, self.stop_bits == StopBits::Two);

        match self.parity {
            Parity::None => tty.control_modes -= ControlModes::PARENB | ControlModes::PARODD,
            Parity::Even => {
                tty.control_modes |= ControlModes::PARENB;
                tty.control_modes -= ControlModes::PARODD;
            }
            Parity::Odd => tty.control_modes |= ControlModes::PARENB | ControlModes::PARODD,
        }

        if self.flow_control == FlowControl::Hardware {
            tty.control_modes |= ControlModes::CRTSCTS;
        }

        tty.special_codes[SpecialCodeIndex::VTIME] = self.vtime;
        tty.special_codes[SpecialCodeIndex::VMIN] = self.vmin;

        tty.set_speed(self.baud_rate.bps())?;
        Ok(())
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::ibis()
    }
}

impl fmt::Display for LinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = match self.data_bits {
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Even => 'E',
            Parity::Odd => 'O',
        };
        let stop = match self.stop_bits {
            StopBits::One => 1,
            StopBits::Two => 2,
        };
        write!(f, "{} {bits}{parity}{stop}", self.baud_rate.bps())?;
        if self.flow_control == FlowControl::Hardware {
            write!(f, " rtscts")?;
        }
        Ok(())
    }
}
