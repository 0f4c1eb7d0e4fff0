/*
    sta_core

    Copyright 2024-2026 The sta_core Authors

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the "Software"),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    ---------------------------------------------------------------------------

    liberty::power.rs

    Per-port internal-power entries and per-cell leakage-power entries
    (SPEC_FULL §3, §4.D). Internal power reuses the same `TimingModel`
    dispatch the delay/check tables use: a rise and a fall model, each looked
    up against (input slew, load cap).

*/

#![allow(dead_code)]

use crate::func_expr::FuncExprId;
use crate::liberty::PortId;
use crate::table::model::{FindValue, ScaleContext, TimingModel};
use crate::table::scale_factor::{Pvt, ScaleFactorType};
use crate::units::RiseFall;

/// One `internal_power` group on a port: an optional `related_pin`, an
/// optional `when` condition restricting it to one case of a multi-case
/// function, an optional related PG-pin, and a rise/fall pair of models.
#[derive(Clone, Debug, Default)]
pub struct InternalPower {
    related_port: Option<PortId>,
    when: Option<FuncExprId>,
    related_pg_pin: Option<String>,
    models: [Option<TimingModel>; 2],
}

impl InternalPower {
    pub fn new(related_port: Option<PortId>, when: Option<FuncExprId>) -> Self {
        InternalPower { related_port, when, ..Default::default() }
    }

    pub fn related_port(&self) -> Option<PortId> {
        self.related_port
    }

    pub fn when(&self) -> Option<FuncExprId> {
        self.when
    }

    pub fn related_pg_pin(&self) -> Option<&str> {
        self.related_pg_pin.as_deref()
    }

    pub fn set_related_pg_pin(&mut self, pin: impl Into<String>) {
        self.related_pg_pin = Some(pin.into());
    }

    pub fn model(&self, rf: RiseFall) -> Option<&TimingModel> {
        self.models[rf.index()].as_ref()
    }

    pub fn set_model(&mut self, rf: RiseFall, model: TimingModel) {
        self.models[rf.index()] = Some(model);
    }

    /// Power drawn by a rise or fall switching event at this entry's related
    /// pin, at the given input slew and output load.
    pub fn power(&self, rf: RiseFall, pvt: Pvt, in_slew: f64, load_cap: f64) -> Option<f64> {
        let model = self.model(rf)?;
        let ctx = ScaleContext {
            pvt,
            scale_factors: None,
            scale_factor_type: ScaleFactorType::InternalPower,
            rise_fall: Some(rf),
        };
        Some(model.find_value(ctx, in_slew, load_cap, 0.0))
    }
}

/// One `leakage_power` group on a cell: an optional `when` condition and a
/// scalar power value, no table lookup involved.
#[derive(Copy, Clone, Debug, Default)]
pub struct LeakagePower {
    when: Option<FuncExprId>,
    power: f64,
}

impl LeakagePower {
    pub fn new(when: Option<FuncExprId>, power: f64) -> Self {
        LeakagePower { when, power }
    }

    pub fn when(&self) -> Option<FuncExprId> {
        self.when
    }

    pub fn power(&self) -> f64 {
        self.power
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::model::GateLinearModel;

    #[test]
    fn internal_power_dispatches_through_timing_model() {
        let mut ip = InternalPower::new(None, None);
        ip.set_model(RiseFall::Rise, GateLinearModel { intrinsic: 1.0, resistance: 2.0 }.into());
        let power = ip.power(RiseFall::Rise, Pvt::default(), 3.0, 0.0).unwrap();
        assert_eq!(power, 7.0);
        assert!(ip.power(RiseFall::Fall, Pvt::default(), 3.0, 0.0).is_none());
    }

    #[test]
    fn leakage_power_is_a_plain_scalar() {
        let lp = LeakagePower::new(None, 1.2e-9);
        assert_eq!(lp.power(), 1.2e-9);
        assert!(lp.when().is_none());
    }
}
