use crate::constants::{DEFAULT_BLEED_MM, DEFAULT_SIGNATURE_CAP, mm_to_pt};
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Imposition configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImposeOptions {
    /// Target page size every input page is normalized onto
    pub target_page: PaperSize,

    /// Output sheet size. `None` derives the double-wide landscape sheet
    /// (2 × page width, page height) from the target page.
    pub sheet: Option<PaperSize>,

    /// Fixed pages per signature. Must be a positive multiple of 4 when
    /// given; `None` selects the automatic bucketing policy.
    pub signature_size: Option<usize>,

    /// Upper bound on pages per signature under the automatic policy
    pub signature_cap: usize,

    /// Bleed distance in millimeters (0 disables bleed compensation)
    pub bleed_mm: f32,

    /// Blank leaves added at the front (each leaf = 2 pages)
    pub front_flyleaves: usize,

    /// Blank leaves added at the back
    pub back_flyleaves: usize,
}

impl Default for ImposeOptions {
    fn default() -> Self {
        Self {
            target_page: PaperSize::A4,
            sheet: None,
            signature_size: None,
            signature_cap: DEFAULT_SIGNATURE_CAP,
            bleed_mm: DEFAULT_BLEED_MM,
            front_flyleaves: 0,
            back_flyleaves: 0,
        }
    }
}

impl ImposeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::InvalidArgument(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            ImposeError::InvalidArgument(format!("Failed to serialize config: {}", e))
        })?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Runs before any page is processed so a bad configuration fails fast
    /// with nothing partially produced.
    pub fn validate(&self) -> Result<()> {
        let (pw, ph) = self.target_page.dimensions_mm();
        if pw <= 0.0 || ph <= 0.0 {
            return Err(ImposeError::InvalidArgument(
                "Target page dimensions must be positive".to_string(),
            ));
        }

        if let Some(sheet) = self.sheet {
            let (sw, sh) = sheet.dimensions_mm();
            if sw <= 0.0 || sh <= 0.0 {
                return Err(ImposeError::InvalidArgument(
                    "Sheet dimensions must be positive".to_string(),
                ));
            }
        }

        if let Some(size) = self.signature_size {
            if size == 0 || size % 4 != 0 {
                return Err(ImposeError::InvalidArgument(
                    "Signature size must be a positive multiple of 4".to_string(),
                ));
            }
        }

        if self.signature_cap == 0 || self.signature_cap % 4 != 0 {
            return Err(ImposeError::InvalidArgument(
                "Signature cap must be a positive multiple of 4".to_string(),
            ));
        }

        if self.bleed_mm < 0.0 {
            return Err(ImposeError::InvalidArgument(
                "Bleed distance must be non-negative".to_string(),
            ));
        }

        Ok(())
    }

    /// Target page dimensions in points
    pub fn page_dimensions_pt(&self) -> (f32, f32) {
        self.target_page.dimensions_pt()
    }

    /// Output sheet dimensions in points (derived double-wide landscape
    /// unless an explicit sheet size is configured)
    pub fn sheet_dimensions_pt(&self) -> (f32, f32) {
        match self.sheet {
            Some(sheet) => sheet.dimensions_pt(),
            None => {
                let (w, h) = self.page_dimensions_pt();
                (2.0 * w, h)
            }
        }
    }

    /// Bleed distance in points
    pub fn bleed_pt(&self) -> f32 {
        mm_to_pt(self.bleed_mm)
    }
}
