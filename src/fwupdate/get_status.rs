use crate::{
    commands::OemCommand,
    connection::{IpmiCommand, Message},
};

/// The Get Firmware Update Status command.
#[derive(Clone, Copy, Debug)]
pub struct GetFwUpdateStatus;

impl From<GetFwUpdateStatus> for Message {
    fn from(_: GetFwUpdateStatus) -> Self {
        OemCommand::GetFwUpdateStatus.message(Vec::new())
    }
}

impl IpmiCommand for GetFwUpdateStatus {
    type Output = FwUpdateStatusReport;
    type Error = StatusError;

    fn parse_success_response(data: &[u8]) -> Result<Self::Output, Self::Error> {
        FwUpdateStatusReport::from_data(data)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StatusError {
    NotEnoughData,
    /// The status ordinal is not one of the known stages.
    InvalidStatus(u8),
}

/// The stage the firmware update is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FwUpdateStatus {
    NoAction,
    ParameterCheckInProgress,
    ParameterCheckSucceeded,
    ParameterCheckFailed,
    ImageDownloadInProgress,
    ImageDownloadSucceeded,
    ImageDownloadFailed,
    Reserved,
    ImageFlashInProgress,
    ImageFlashSucceeded,
    ImageFlashFailed,
    ImageVerificationInProgress,
    ImageVerificationSucceeded,
    ImageVerificationFailed,
}

impl TryFrom<u8> for FwUpdateStatus {
    type Error = StatusError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let status = match value {
            0 => Self::NoAction,
            1 => Self::ParameterCheckInProgress,
            2 => Self::ParameterCheckSucceeded,
            3 => Self::ParameterCheckFailed,
            4 => Self::ImageDownloadInProgress,
            5 => Self::ImageDownloadSucceeded,
            6 => Self::ImageDownloadFailed,
            7 => Self::Reserved,
            8 => Self::ImageFlashInProgress,
            9 => Self::ImageFlashSucceeded,
            10 => Self::ImageFlashFailed,
            11 => Self::ImageVerificationInProgress,
            12 => Self::ImageVerificationSucceeded,
            13 => Self::ImageVerificationFailed,
            v => return Err(StatusError::InvalidStatus(v)),
        };

        Ok(status)
    }
}

impl FwUpdateStatus {
    /// Whether the BMC reports a progress percentage for this stage.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            Self::ParameterCheckInProgress
                | Self::ImageDownloadInProgress
                | Self::ImageFlashInProgress
                | Self::ImageVerificationInProgress
        )
    }

    pub fn description(&self) -> &'static str {
        match self {
            FwUpdateStatus::NoAction => "No action",
            FwUpdateStatus::ParameterCheckInProgress => "Parameter check in progress",
            FwUpdateStatus::ParameterCheckSucceeded => "Parameter check succeeded",
            FwUpdateStatus::ParameterCheckFailed => "Parameter check failed",
            FwUpdateStatus::ImageDownloadInProgress => "Image download in progress",
            FwUpdateStatus::ImageDownloadSucceeded => "Image download succeeded",
            FwUpdateStatus::ImageDownloadFailed => "Image download failed",
            FwUpdateStatus::Reserved => "Reserved",
            FwUpdateStatus::ImageFlashInProgress => "Image flash in progress",
            FwUpdateStatus::ImageFlashSucceeded => "Image flash succeeded",
            FwUpdateStatus::ImageFlashFailed => "Image flash failed",
            FwUpdateStatus::ImageVerificationInProgress => "Image verification in progress",
            FwUpdateStatus::ImageVerificationSucceeded => "Image verification succeeded",
            FwUpdateStatus::ImageVerificationFailed => "Image verification failed",
        }
    }
}

/// A firmware update status, with the progress of in-progress stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FwUpdateStatusReport {
    pub status: FwUpdateStatus,
    /// Percentage done, only present if [`FwUpdateStatus::is_in_progress`].
    pub progress: Option<u8>,
}

impl FwUpdateStatusReport {
    pub fn from_data(data: &[u8]) -> Result<Self, StatusError> {
        let status = FwUpdateStatus::try_from(*data.first().ok_or(StatusError::NotEnoughData)?)?;

        let progress = if status.is_in_progress() {
            Some(*data.get(1).ok_or(StatusError::NotEnoughData)?)
        } else {
            None
        };

        Ok(Self { status, progress })
    }
}

impl core::fmt::Display for FwUpdateStatusReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let description = self.status.description();

        match self.progress {
            Some(progress) => write!(f, "{description}: {progress}% done."),
            None => write!(f, "{description}."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_progress() {
        let report = GetFwUpdateStatus::parse_success_response(&[4, 42]).unwrap();

        assert_eq!(report.status, FwUpdateStatus::ImageDownloadInProgress);
        assert_eq!(report.to_string(), "Image download in progress: 42% done.");
    }

    #[test]
    fn finished_stage_has_no_percentage() {
        let report = GetFwUpdateStatus::parse_success_response(&[6, 42]).unwrap();

        assert_eq!(report.progress, None);
        assert_eq!(report.to_string(), "Image download failed.");
    }

    #[test]
    fn in_progress_stages() {
        let in_progress: Vec<u8> = (0..=13)
            .filter(|v| FwUpdateStatus::try_from(*v).unwrap().is_in_progress())
            .collect();

        assert_eq!(in_progress, vec![1, 4, 8, 11]);
    }

    #[test]
    fn unknown_ordinal_is_invalid_status() {
        assert_eq!(
            GetFwUpdateStatus::parse_success_response(&[14]),
            Err(StatusError::InvalidStatus(14))
        );
        assert_eq!(
            GetFwUpdateStatus::parse_success_response(&[0xFF, 0]),
            Err(StatusError::InvalidStatus(0xFF))
        );
    }

    #[test]
    fn missing_progress_byte() {
        assert_eq!(
            GetFwUpdateStatus::parse_success_response(&[8]),
            Err(StatusError::NotEnoughData)
        );
        assert_eq!(
            GetFwUpdateStatus::parse_success_response(&[]),
            Err(StatusError::NotEnoughData)
        );
    }

    #[test]
    fn request_has_no_data() {
        let message: Message = GetFwUpdateStatus.into();

        assert_eq!(message.cmd(), 0x88);
        assert!(message.data().is_empty());
    }
}
