use crate::code_validator::ValidationStage;
use crate::observability::labels::{Labels, NO_LABEL};
use metrics::{counter, Counter};

pub struct ValidatorMetrics {
    pub accepted: Counter,
    rejected_trim: Counter,
    rejected_shape: Counter,
    rejected_length: Counter,
    rejected_check_digit: Counter,
}

const STAGE: &str = "stage";

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        let rejected = |stage: ValidationStage| {
            let stage: &'static str = stage.into();
            counter!(
                "code_validation.rejected",
                labels.clone_with_labels(&[(STAGE, stage)])
            )
        };
        ValidatorMetrics {
            accepted: counter!("code_validation.accepted", labels.clone()),
            rejected_trim: rejected(ValidationStage::Trim),
            rejected_shape: rejected(ValidationStage::Shape),
            rejected_length: rejected(ValidationStage::Length),
            rejected_check_digit: rejected(ValidationStage::CheckDigit),
        }
    }

    pub fn rejected(&self, stage: ValidationStage) -> &Counter {
        match stage {
            ValidationStage::Trim => &self.rejected_trim,
            ValidationStage::Shape => &self.rejected_shape,
            ValidationStage::Length => &self.rejected_length,
            ValidationStage::CheckDigit => &self.rejected_check_digit,
        }
    }
}

impl Default for ValidatorMetrics {
    fn default() -> Self {
        ValidatorMetrics::new(&NO_LABEL)
    }
}
