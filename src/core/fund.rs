/// The two pension pools for one projection run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FundState {
    pub uncrystallised: f64,
    pub crystallised: f64,
}

/// Split of an uncrystallised funds pension lump sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UfplsPayment {
    pub tax_free: f64,
    pub taxable: f64,
}

impl FundState {
    pub fn new(initial_fund: f64) -> Self {
        Self {
            uncrystallised: initial_fund,
            crystallised: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.uncrystallised + self.crystallised
    }

    /// Net real growth on the uncrystallised pool. The crystallised pool is not grown.
    pub fn apply_growth(&mut self, investment_growth_rate: f64, amc: f64, inflation_rate: f64) {
        self.uncrystallised *= 1.0 + investment_growth_rate - amc - inflation_rate;
    }

    pub fn contribute(&mut self, amount: f64) {
        self.uncrystallised += amount;
    }

    /// Releases `tax_free` from the uncrystallised pool and moves three times that amount into
    /// the crystallised pool. The uncrystallised side of the transfer is clamped to what is
    /// left, the crystallised side is not.
    pub fn crystallise(&mut self, tax_free: f64) {
        self.uncrystallised -= tax_free;
        let transfer = tax_free * 3.0;
        self.crystallised += transfer;
        self.uncrystallised -= self.uncrystallised.min(transfer);
    }

    /// Takes the full tax-free entitlement and crystallises everything that remains.
    pub fn take_full_tax_free_cash(&mut self, tax_free_component: f64) -> f64 {
        let tax_free = self.uncrystallised * tax_free_component;
        self.uncrystallised -= tax_free;
        self.crystallised += self.uncrystallised;
        self.uncrystallised = 0.0;
        tax_free
    }

    pub fn take_partial_tax_free_cash(&mut self, requested: f64, tax_free_component: f64) -> f64 {
        let cap = self.uncrystallised * tax_free_component;
        let tax_free = requested.min(cap);
        self.crystallise(tax_free);
        tax_free
    }

    pub fn take_ufpls(&mut self, requested: f64, tax_free_component: f64) -> UfplsPayment {
        let amount = requested.min(self.uncrystallised);
        self.uncrystallised -= amount;
        let tax_free = amount * tax_free_component;
        UfplsPayment {
            tax_free,
            taxable: amount - tax_free,
        }
    }

    /// Draws up to `requested` from the uncrystallised pool as tax-free cash, crystallising
    /// alongside it. Returns the amount drawn.
    pub fn draw_tax_free(&mut self, requested: f64) -> f64 {
        let withdrawal = self.uncrystallised.min(requested);
        self.crystallise(withdrawal);
        withdrawal
    }

    /// Draws up to `requested` straight out of the uncrystallised pool as fully taxable capital,
    /// with no crystallisation and no tax-free element.
    pub fn draw_taxable_capital(&mut self, requested: f64) -> f64 {
        let withdrawal = self.uncrystallised.min(requested);
        self.uncrystallised -= withdrawal;
        withdrawal
    }

    pub fn draw_crystallised(&mut self, requested: f64) -> f64 {
        let withdrawal = self.crystallised.min(requested);
        self.crystallised -= withdrawal;
        withdrawal
    }
}
