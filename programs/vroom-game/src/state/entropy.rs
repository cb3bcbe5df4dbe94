use anchor_lang::prelude::*;
use crate::errors::VroomError;

/// Per-round randomness slot, created alongside its round.
///
/// Seeds: `["entropy", round_id (u64 LE)]`
///
/// Lifecycle: NotRequested -> Requested (close_round) -> Fulfilled (oracle).
/// Settlement reads the value; the record is left as-is afterwards.
#[account]
#[derive(InitSpace)]
pub struct EntropyRequest {
    pub round_id: u64,
    pub status: EntropyStatus,
    /// Correlation id handed to the oracle; 0 while NotRequested.
    pub request_id: u64,
    /// Raw 32-byte VRF output written at fulfillment.
    pub randomness: [u8; 32],
    pub requested_slot: u64,
    pub fulfilled_slot: u64,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum EntropyStatus {
    NotRequested,
    Requested,
    Fulfilled,
}

impl EntropyRequest {
    pub const LEN: usize = 8 + EntropyRequest::INIT_SPACE;

    pub fn init(&mut self, round_id: u64, bump: u8) {
        self.round_id = round_id;
        self.status = EntropyStatus::NotRequested;
        self.request_id = 0;
        self.randomness = [0; 32];
        self.requested_slot = 0;
        self.fulfilled_slot = 0;
        self.bump = bump;
    }

    pub fn request(&mut self, request_id: u64, slot: u64) -> Result<()> {
        require!(self.status == EntropyStatus::NotRequested, VroomError::AlreadyRequested);
        self.status = EntropyStatus::Requested;
        self.request_id = request_id;
        self.requested_slot = slot;
        Ok(())
    }

    /// `outstanding` is the game's single in-flight correlation id.
    pub fn fulfill(
        &mut self,
        request_id: u64,
        outstanding: Option<u64>,
        randomness: [u8; 32],
        slot: u64,
    ) -> Result<()> {
        require!(
            self.status == EntropyStatus::Requested
                && self.request_id == request_id
                && outstanding == Some(request_id),
            VroomError::UnknownRequest
        );
        self.status = EntropyStatus::Fulfilled;
        self.randomness = randomness;
        self.fulfilled_slot = slot;
        Ok(())
    }

    pub fn consume(&self) -> Result<[u8; 32]> {
        require!(self.status == EntropyStatus::Fulfilled, VroomError::NotFulfilled);
        Ok(self.randomness)
    }
}
