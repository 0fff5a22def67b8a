use super::RunState;
use crate::{Advisory, Event, EventBus, ModifierInstance, Phase, RackError};

impl RunState {
    /// Buy one of the current offers by definition id, then roll into the
    /// next round. Insufficient money and a full rack are economic
    /// rejections: only the advisory changes. An id that is not on offer is
    /// ignored outright.
    pub fn buy_modifier(&mut self, def_id: &str, events: &mut EventBus) {
        if self.state.phase != Phase::Shop {
            return;
        }
        let Some(cost) = self
            .shop
            .as_ref()
            .and_then(|shop| shop.offer(def_id))
            .map(|offer| offer.cost)
        else {
            return;
        };
        if self.state.money < cost {
            self.state.message = Some(Advisory::TooPoor);
            return;
        }
        let instance = ModifierInstance {
            uid: self.alloc_instance_uid(),
            def_id: def_id.to_string(),
        };
        match self.rack.try_add(instance) {
            Ok(()) => {}
            Err(RackError::NoSlots) => {
                self.state.message = Some(Advisory::RackFull);
                return;
            }
        }
        self.state.money -= cost;
        events.push(Event::ModifierBought {
            id: def_id.to_string(),
            cost,
            money: self.state.money,
        });
        self.advance_round(events);
    }

    /// Leave the shop empty-handed. Takes the identical round-advance path
    /// as a successful purchase.
    pub fn skip_shop(&mut self, events: &mut EventBus) {
        if self.state.phase != Phase::Shop {
            return;
        }
        events.push(Event::ShopSkipped {
            round: self.state.round,
        });
        self.advance_round(events);
    }
}
