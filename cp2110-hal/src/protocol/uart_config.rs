use super::ReportKind;
use crate::DecodeError;
use crate::constants::UART_CONFIG_REPORT_LEN;

/// UART line settings of the CP2110.
///
/// Read with [`CP2110::uart_read_config`] and change with
/// [`CP2110::uart_write_config`].
///
/// [`CP2110::uart_read_config`]: crate::CP2110::uart_read_config
/// [`CP2110::uart_write_config`]: crate::CP2110::uart_write_config
///
/// # Interface specification
///
/// See the Get/Set UART Config report (0x50) in AN434. Bytes are
/// numbered from 0, which holds the report ID.
///
/// | Byte | Field |
/// |------|-------|
/// | 1..=4 | baud rate, big-endian |
/// | 5 | parity |
/// | 6 | flow control |
/// | 7 | data bits |
/// | 8 | stop bits |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartConfig {
    /// Baud rate in bits per second.
    ///
    /// The CP2110 accepts 300 to 921,600 baud; the value is passed through unchecked.
    pub baud: u32,
    /// Parity bit setting.
    pub parity: Parity,
    /// Hardware (RTS/CTS) flow control.
    pub flow_control: FlowControl,
    /// Number of data bits per character.
    pub data_bits: DataBits,
    /// Length of the stop bit(s).
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    /// 9600 baud, 8 data bits, no parity, short stop bit, no flow control.
    fn default() -> Self {
        Self::new(9600)
    }
}

impl UartConfig {
    /// 8-N-1 settings without flow control at the given baud rate.
    pub fn new(baud: u32) -> Self {
        Self {
            baud,
            parity: Parity::None,
            flow_control: FlowControl::Disabled,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::Short,
        }
    }

    /// Change the baud rate.
    pub fn with_baud(mut self, baud: u32) -> Self {
        self.baud = baud;
        self
    }

    /// Change the parity setting.
    pub fn with_parity(mut self, parity: Parity) -> Self {
        self.parity = parity;
        self
    }

    /// Change the flow control setting.
    pub fn with_flow_control(mut self, flow_control: FlowControl) -> Self {
        self.flow_control = flow_control;
        self
    }

    /// Change the number of data bits.
    pub fn with_data_bits(mut self, data_bits: DataBits) -> Self {
        self.data_bits = data_bits;
        self
    }

    /// Change the stop bit length.
    pub fn with_stop_bits(mut self, stop_bits: StopBits) -> Self {
        self.stop_bits = stop_bits;
        self
    }

    /// Encode the settings as a Set UART Config feature report.
    pub fn to_feature_report(&self) -> [u8; UART_CONFIG_REPORT_LEN] {
        let [b3, b2, b1, b0] = self.baud.to_be_bytes();
        [
            ReportKind::UartConfig.id(),
            b3,
            b2,
            b1,
            b0,
            self.parity.into(),
            self.flow_control.into(),
            self.data_bits.into(),
            self.stop_bits.into(),
        ]
    }

    /// Decode a Get UART Config feature report.
    ///
    /// Byte 0 (the echoed report ID) is not checked.
    pub fn from_feature_report(buf: &[u8; UART_CONFIG_REPORT_LEN]) -> Result<Self, DecodeError> {
        Ok(Self {
            baud: u32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]),
            parity: buf[5].try_into()?,
            flow_control: buf[6].try_into()?,
            data_bits: buf[7].try_into()?,
            stop_bits: buf[8].try_into()?,
        })
    }
}

impl std::fmt::Display for UartConfig {
    /// Conventional shorthand, eg `115200 8-N-1`, with `RTS/CTS` appended when
    /// flow control is enabled.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data_bits: u8 = match self.data_bits {
            DataBits::Five => 5,
            DataBits::Six => 6,
            DataBits::Seven => 7,
            DataBits::Eight => 8,
        };
        let parity = match self.parity {
            Parity::None => 'N',
            Parity::Odd => 'O',
            Parity::Even => 'E',
            Parity::Mark => 'M',
            Parity::Space => 'S',
        };
        // A long stop bit is 1.5 bits with 5 data bits and 2 bits otherwise.
        let stop_bits = match (self.stop_bits, self.data_bits) {
            (StopBits::Short, _) => "1",
            (StopBits::Long, DataBits::Five) => "1.5",
            (StopBits::Long, _) => "2",
        };
        write!(f, "{} {data_bits}-{parity}-{stop_bits}", self.baud)?;
        if self.flow_control == FlowControl::Enabled {
            write!(f, " RTS/CTS")?;
        }
        Ok(())
    }
}

/// UART parity setting.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    /// No parity bit.
    #[default]
    None,
    /// Odd parity.
    Odd,
    /// Even parity.
    Even,
    /// Parity bit always 1.
    Mark,
    /// Parity bit always 0.
    Space,
}

impl TryFrom<u8> for Parity {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Odd),
            2 => Ok(Self::Even),
            3 => Ok(Self::Mark),
            4 => Ok(Self::Space),
            other => Err(DecodeError::new("parity", other)),
        }
    }
}

impl From<Parity> for u8 {
    fn from(value: Parity) -> Self {
        match value {
            Parity::None => 0,
            Parity::Odd => 1,
            Parity::Even => 2,
            Parity::Mark => 3,
            Parity::Space => 4,
        }
    }
}

/// RTS/CTS hardware flow control.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
    /// No flow control.
    #[default]
    Disabled,
    /// RTS/CTS hardware flow control.
    Enabled,
}

impl TryFrom<u8> for FlowControl {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Disabled),
            1 => Ok(Self::Enabled),
            other => Err(DecodeError::new("flow control", other)),
        }
    }
}

impl From<FlowControl> for u8 {
    fn from(value: FlowControl) -> Self {
        match value {
            FlowControl::Disabled => 0,
            FlowControl::Enabled => 1,
        }
    }
}

/// Number of data bits in each UART character.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    /// 5 data bits.
    Five,
    /// 6 data bits.
    Six,
    /// 7 data bits.
    Seven,
    /// 8 data bits.
    #[default]
    Eight,
}

impl TryFrom<u8> for DataBits {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Five),
            1 => Ok(Self::Six),
            2 => Ok(Self::Seven),
            3 => Ok(Self::Eight),
            other => Err(DecodeError::new("data bits", other)),
        }
    }
}

impl From<DataBits> for u8 {
    fn from(value: DataBits) -> Self {
        match value {
            DataBits::Five => 0,
            DataBits::Six => 1,
            DataBits::Seven => 2,
            DataBits::Eight => 3,
        }
    }
}

/// Stop bit length.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    /// One stop bit.
    #[default]
    Short,
    /// 1.5 stop bits with 5 data bits, 2 stop bits otherwise.
    Long,
}

impl TryFrom<u8> for StopBits {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Short),
            1 => Ok(Self::Long),
            other => Err(DecodeError::new("stop bits", other)),
        }
    }
}

impl From<StopBits> for u8 {
    fn from(value: StopBits) -> Self {
        match value {
            StopBits::Short => 0,
            StopBits::Long => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_9600_8n1() {
        let config = UartConfig {
            baud: 9600,
            parity: Parity::None,
            flow_control: FlowControl::Disabled,
            data_bits: DataBits::Eight,
            stop_bits: StopBits::Short,
        };
        assert_eq!(
            config.to_feature_report(),
            [0x50, 0x00, 0x00, 0x25, 0x80, 0x00, 0x00, 0x03, 0x00]
        );
        assert_eq!(config, UartConfig::default());
    }

    #[test]
    fn decode_ignores_report_id_byte() {
        let buf = [0x00, 0x00, 0x01, 0xC2, 0x00, 0x02, 0x01, 0x02, 0x01];
        let config = UartConfig::from_feature_report(&buf).unwrap();
        assert_eq!(config.baud, 115_200);
        assert_eq!(config.parity, Parity::Even);
        assert_eq!(config.flow_control, FlowControl::Enabled);
        assert_eq!(config.data_bits, DataBits::Seven);
        assert_eq!(config.stop_bits, StopBits::Long);
    }

    #[test]
    fn decode_rejects_undefined_parity() {
        let buf = [0x50, 0x00, 0x00, 0x25, 0x80, 0x05, 0x00, 0x03, 0x00];
        let err = UartConfig::from_feature_report(&buf).unwrap_err();
        assert_eq!(err, DecodeError::new("parity", 5));
    }

    #[test]
    fn decode_rejects_each_undefined_field() {
        let valid = UartConfig::default().to_feature_report();
        for (index, bad_value, field) in [
            (6, 2, "flow control"),
            (7, 4, "data bits"),
            (8, 2, "stop bits"),
        ] {
            let mut buf = valid;
            buf[index] = bad_value;
            assert_eq!(
                UartConfig::from_feature_report(&buf),
                Err(DecodeError::new(field, bad_value))
            );
        }
    }

    #[test]
    fn display_shorthand() {
        assert_eq!(UartConfig::new(115_200).to_string(), "115200 8-N-1");
        let config = UartConfig::new(300)
            .with_data_bits(DataBits::Five)
            .with_parity(Parity::Mark)
            .with_stop_bits(StopBits::Long)
            .with_flow_control(FlowControl::Enabled);
        assert_eq!(config.to_string(), "300 5-M-1.5 RTS/CTS");
    }
}
