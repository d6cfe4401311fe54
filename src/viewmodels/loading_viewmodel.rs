// ============================================================================
// LOADING VIEWMODEL - Progreso de la pantalla de carga
// ============================================================================

pub const COMPLETE: f64 = 100.0;

/// Progreso en [0, 100]. Una vez completo no vuelve a cambiar.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LoadingProgress {
    percent: f64,
}

impl LoadingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Porcentaje entero para la barra y el texto
    pub fn rounded(&self) -> u32 {
        self.percent.floor() as u32
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= COMPLETE
    }

    /// Avanzar y devolver `true` cuando se llega a 100.
    /// Incrementos negativos o no finitos se ignoran.
    pub fn advance(&mut self, increment: f64) -> bool {
        if increment.is_finite() && increment > 0.0 {
            self.percent = (self.percent + increment).min(COMPLETE);
        }
        self.is_complete()
    }
}
