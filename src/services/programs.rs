// ABOUTME: Program generation service wrapping the seeded generator
// ABOUTME: Validates requests and applies the configured artificial latency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NGX Pulse

use crate::config::ProgramServiceConfig;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use pulse_core::models::{AIGeneratedProgram, GenerateProgramRequest};
use pulse_intelligence::ProgramGenerator;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::debug;

/// Generates programs one request at a time over a shared RNG
pub struct ProgramService {
    generator: Mutex<ProgramGenerator>,
    delay_min_ms: u64,
    delay_max_ms: u64,
}

impl ProgramService {
    /// Service configured from `config`; seeded when a seed is set
    #[must_use]
    pub fn new(config: &ProgramServiceConfig) -> Self {
        let generator = config
            .rng_seed
            .map_or_else(ProgramGenerator::from_entropy, ProgramGenerator::seeded);
        Self {
            generator: Mutex::new(generator),
            delay_min_ms: config.delay_min_ms,
            delay_max_ms: config.delay_max_ms,
        }
    }

    /// Generate a program, then wait out the simulated processing time
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the request has no user id
    pub async fn generate(&self, request: &GenerateProgramRequest) -> AppResult<AIGeneratedProgram> {
        if request.user_id.trim().is_empty() {
            return Err(AppError::invalid_input("user_id is required"));
        }

        let started = Instant::now();
        let (program, delay_ms) = {
            let mut generator = self.generator.lock().await;
            let delay_ms = generator.sample_range(self.delay_min_ms, self.delay_max_ms);
            (generator.generate(request), delay_ms)
        };

        if delay_ms > 0 {
            debug!(delay_ms, "Simulating program generation latency");
            sleep(Duration::from_millis(delay_ms)).await;
        }

        AppLogger::log_program_generated(
            &request.user_id,
            program.program_type.as_str(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(program)
    }
}
