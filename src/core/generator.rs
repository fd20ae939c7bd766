use crate::core::{ConfigProvider, Identifier, LineItem, Order};
use crate::utils::error::{PublishError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub item_pool_size: usize,
    pub customer_pool_size: usize,
    pub max_line_items: u32,
    pub max_quantity: u32,
    pub max_price: u32,
    pub seed: Option<u64>,
}

impl GeneratorSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            item_pool_size: config.item_pool_size(),
            customer_pool_size: config.customer_pool_size(),
            max_line_items: config.max_line_items(),
            max_quantity: config.max_quantity(),
            max_price: config.max_price(),
            seed: config.seed(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentifierPool {
    name: &'static str,
    ids: Vec<Identifier>,
}

impl IdentifierPool {
    pub fn generate<R: Rng>(name: &'static str, rng: &mut R, size: usize) -> Self {
        let ids = (0..size)
            .map(|_| Identifier::from_random_bytes(rng.gen()))
            .collect();
        Self { name, ids }
    }

    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Identifier> {
        self.ids
            .choose(rng)
            .copied()
            .ok_or_else(|| PublishError::EmptyPoolError {
                pool: self.name.to_string(),
            })
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> &[Identifier] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Builds random orders from fixed item and customer pools.
///
/// The item pool is drawn before the customer pool, so a given seed always
/// yields the same pools and the same order sequence.
pub struct OrderGenerator {
    rng: StdRng,
    items: IdentifierPool,
    customers: IdentifierPool,
    max_line_items: u32,
    max_quantity: u32,
    max_price: u32,
}

impl OrderGenerator {
    pub fn new(settings: &GeneratorSettings) -> Self {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let items = IdentifierPool::generate("item", &mut rng, settings.item_pool_size);
        let customers = IdentifierPool::generate("customer", &mut rng, settings.customer_pool_size);
        tracing::debug!(
            "Generated {} item ids and {} customer ids",
            items.len(),
            customers.len()
        );

        Self {
            rng,
            items,
            customers,
            max_line_items: settings.max_line_items,
            max_quantity: settings.max_quantity,
            max_price: settings.max_price,
        }
    }

    pub fn next_order(&mut self) -> Result<Order> {
        let customer_id = self.customers.choose(&mut self.rng)?;
        let count = Self::draw(&mut self.rng, "max_line_items", self.max_line_items)?;

        let mut line_items = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let item_id = self.items.choose(&mut self.rng)?;
            let quantity = Self::draw(&mut self.rng, "max_quantity", self.max_quantity)?;
            let price = Self::draw(&mut self.rng, "max_price", self.max_price)?;
            line_items.push(LineItem {
                item_id,
                quantity,
                price,
            });
        }

        Ok(Order {
            customer_id,
            line_items,
        })
    }

    pub fn items(&self) -> &IdentifierPool {
        &self.items
    }

    pub fn customers(&self) -> &IdentifierPool {
        &self.customers
    }

    // 1..=max, max 為 0 時 gen_range 會 panic
    fn draw(rng: &mut StdRng, field: &str, max: u32) -> Result<u32> {
        if max == 0 {
            return Err(PublishError::InvalidConfigValueError {
                field: field.to_string(),
                value: max.to_string(),
                reason: "Value must be at least 1".to_string(),
            });
        }
        Ok(rng.gen_range(1..=max))
    }
}
