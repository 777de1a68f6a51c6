/// The user's filter choices. An empty string means "not selected".
///
/// Setters apply the cascade reset: a new region clears district and
/// institution, a new district clears institution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    region: String,
    district: String,
    institution: String,
    search: String,
}

impl Selection {
    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn district(&self) -> &str {
        &self.district
    }

    pub fn institution(&self) -> &str {
        &self.institution
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = region.into();
        self.district.clear();
        self.institution.clear();
    }

    pub fn set_district(&mut self, district: impl Into<String>) {
        self.district = district.into();
        self.institution.clear();
    }

    pub fn set_institution(&mut self, institution: impl Into<String>) {
        self.institution = institution.into();
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
            && self.district.is_empty()
            && self.institution.is_empty()
            && self.search.is_empty()
    }
}
