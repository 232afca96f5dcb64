use super::{build_nre_number, CodeOutcome, Disambiguator, NreNumberInputs, OrgCodeTable};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Состояние формы создания NRE-бюджета
///
/// Хранит случайную часть номера, замороженную на время редактирования:
/// смена организации или даты не меняет уже показанный хвост номера.
/// Новое значение появляется только при `reset` (повторное открытие формы).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBuilderSession {
    random: Disambiguator,
}

impl CodeBuilderSession {
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            random: Disambiguator::draw(rng),
        }
    }

    /// Восстановить сессию с уже показанным значением
    pub fn resume(random: Disambiguator) -> Self {
        Self { random }
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.random = Disambiguator::draw(rng);
    }

    pub fn disambiguator(&self) -> Disambiguator {
        self.random
    }

    pub fn nre_number(
        &self,
        inputs: &NreNumberInputs,
        table: &OrgCodeTable,
        epoch: NaiveDate,
    ) -> CodeOutcome {
        build_nre_number(inputs, self.random, table, epoch)
    }
}
