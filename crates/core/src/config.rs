//! Runtime configuration, resolved once at startup and handed to the agent.

use serde::{Deserialize, Serialize};

use crate::error::{IntakeError, IntakeResult};
use crate::policy::{EscalationMode, PolicySet};

pub const DEFAULT_FOLLOWUP_DAYS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeConfig {
    followup_days: u32,
    escalation_mode: EscalationMode,
}

impl IntakeConfig {
    pub fn new(followup_days: u32, escalation_mode: EscalationMode) -> IntakeResult<Self> {
        if followup_days == 0 {
            return Err(IntakeError::InvalidFollowupDays(followup_days));
        }

        Ok(Self {
            followup_days,
            escalation_mode,
        })
    }

    pub fn followup_days(&self) -> u32 {
        self.followup_days
    }

    pub fn escalation_mode(&self) -> EscalationMode {
        self.escalation_mode
    }

    pub fn policy_set(&self) -> PolicySet {
        PolicySet {
            escalation_mode: self.escalation_mode,
        }
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            followup_days: DEFAULT_FOLLOWUP_DAYS,
            escalation_mode: EscalationMode::default(),
        }
    }
}
