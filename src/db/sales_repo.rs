// src/db/sales_repo.rs

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use anyhow::anyhow;

use crate::{common::error::AppError, db::generator, models::sales::TransactionRecord};

/// Um dataset gerado: somente leitura, compartilhado entre sessões.
pub type Dataset = Arc<[TransactionRecord]>;

/// Repositório em memória das vendas sintéticas.
///
/// Cada (seed, count) é gerado uma única vez por processo e depois servido do cache.
#[derive(Clone)]
pub struct SalesRepository {
    seed: u64,
    rows: usize,
    cache: Arc<RwLock<HashMap<(u64, usize), Dataset>>>,
}

impl SalesRepository {
    pub fn new(seed: u64, rows: usize) -> Self {
        Self {
            seed,
            rows,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// O dataset configurado para este processo.
    pub fn records(&self) -> Result<Dataset, AppError> {
        self.dataset(self.seed, self.rows)
    }

    /// Busca no cache ou gera (uma vez) o dataset de (seed, count).
    pub fn dataset(&self, seed: u64, count: usize) -> Result<Dataset, AppError> {
        // 1. Caminho rápido: leitura
        {
            let cache = self
                .cache
                .read()
                .map_err(|_| anyhow!("cache de datasets envenenado"))?;
            if let Some(dataset) = cache.get(&(seed, count)) {
                return Ok(Arc::clone(dataset));
            }
        }

        // 2. Gera sob o lock de escrita, para duas sessões não gerarem o mesmo dataset
        let mut cache = self
            .cache
            .write()
            .map_err(|_| anyhow!("cache de datasets envenenado"))?;

        let dataset = cache
            .entry((seed, count))
            .or_insert_with(|| {
                tracing::info!("🎲 Gerando dataset sintético (seed={}, linhas={})", seed, count);
                Arc::from(generator::generate(seed, count))
            });

        Ok(Arc::clone(dataset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_is_served_from_cache() {
        let repo = SalesRepository::new(42, 100);
        let first = repo.records().unwrap();
        let second = repo.dataset(42, 100).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 100);
    }

    #[test]
    fn clones_share_the_cache() {
        let repo = SalesRepository::new(42, 50);
        let clone = repo.clone();
        assert!(Arc::ptr_eq(&repo.records().unwrap(), &clone.records().unwrap()));
    }

    #[test]
    fn other_keys_get_their_own_dataset() {
        let repo = SalesRepository::new(42, 50);
        let base = repo.records().unwrap();
        let other_seed = repo.dataset(43, 50).unwrap();
        let other_count = repo.dataset(42, 60).unwrap();
        assert!(!Arc::ptr_eq(&base, &other_seed));
        assert_eq!(other_count.len(), 60);
        // Mesma seed: o prefixo é o mesmo
        assert_eq!(&other_count[..50], &base[..]);
    }
}
