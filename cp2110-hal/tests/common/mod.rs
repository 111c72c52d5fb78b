//! In-memory stand-in for a CP2110 attached over USB HID.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use cp2110_hal::HidTransport;
use hidapi::{HidError, HidResult};

/// Records everything sent to it and replays canned responses.
#[derive(Debug, Default)]
pub struct FakeCp2110 {
    /// Get-feature-report responses, keyed by report ID.
    feature_responses: RefCell<HashMap<u8, Vec<u8>>>,
    /// Feature reports sent by the driver, in order.
    sent_feature_reports: RefCell<Vec<Vec<u8>>>,
    /// Interrupt reports written by the driver, in order.
    written_reports: RefCell<Vec<Vec<u8>>>,
    /// Interrupt reports waiting to be read by the driver.
    pending_reads: RefCell<VecDeque<Vec<u8>>>,
    /// Index of the interrupt report write that should fail.
    fail_write_number: Cell<Option<usize>>,
    /// Last blocking mode set by the driver.
    pub blocking_mode: Cell<Option<bool>>,
}

impl FakeCp2110 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_to_feature_report(&self, response: &[u8]) {
        self.respond_to_feature_report_as(response[0], response);
    }

    /// Answer requests for `report_id` with `response`, whatever its first byte.
    pub fn respond_to_feature_report_as(&self, report_id: u8, response: &[u8]) {
        self.feature_responses
            .borrow_mut()
            .insert(report_id, response.to_vec());
    }

    pub fn queue_read(&self, report: &[u8]) {
        self.pending_reads.borrow_mut().push_back(report.to_vec());
    }

    pub fn fail_write(&self, write_number: usize) {
        self.fail_write_number.set(Some(write_number));
    }

    pub fn sent_feature_reports(&self) -> Vec<Vec<u8>> {
        self.sent_feature_reports.borrow().clone()
    }

    pub fn written_reports(&self) -> Vec<Vec<u8>> {
        self.written_reports.borrow().clone()
    }
}

fn fake_error(message: &str) -> HidError {
    HidError::HidApiError {
        message: message.to_owned(),
    }
}

impl HidTransport for FakeCp2110 {
    fn get_feature_report(&self, buf: &mut [u8]) -> HidResult<usize> {
        let responses = self.feature_responses.borrow();
        let response = responses
            .get(&buf[0])
            .ok_or_else(|| fake_error("no response for report"))?;
        let n = response.len().min(buf.len());
        buf[..n].copy_from_slice(&response[..n]);
        Ok(n)
    }

    fn send_feature_report(&self, data: &[u8]) -> HidResult<()> {
        self.sent_feature_reports.borrow_mut().push(data.to_vec());
        Ok(())
    }

    fn write(&self, data: &[u8]) -> HidResult<usize> {
        let mut written = self.written_reports.borrow_mut();
        if self.fail_write_number.get() == Some(written.len()) {
            return Err(fake_error("device disconnected"));
        }
        written.push(data.to_vec());
        Ok(data.len())
    }

    fn read(&self, buf: &mut [u8]) -> HidResult<usize> {
        match self.pending_reads.borrow_mut().pop_front() {
            Some(report) => {
                let n = report.len().min(buf.len());
                buf[..n].copy_from_slice(&report[..n]);
                Ok(n)
            }
            None => Ok(0),
        }
    }

    fn set_blocking_mode(&self, blocking: bool) -> HidResult<()> {
        self.blocking_mode.set(Some(blocking));
        Ok(())
    }
}
