//! Addresses service.

use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::{
    database::Db,
    domain::addresses::{
        errors::AddressesServiceError,
        models::{Address, AddressUpdate, NewAddress},
        repository::PgAddressesRepository,
    },
    identity::UserId,
};

#[derive(Debug, Clone)]
pub struct PgAddressesService {
    db: Db,
    repository: PgAddressesRepository,
}

impl PgAddressesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAddressesRepository::new(),
        }
    }
}

#[async_trait]
impl AddressesService for PgAddressesService {
    async fn add_address(
        &self,
        user: &UserId,
        address: NewAddress,
    ) -> Result<Address, AddressesServiceError> {
        let missing = address.fields.missing_fields();

        if !missing.is_empty() {
            return Err(AddressesServiceError::InvalidAddress(missing));
        }

        let mut tx = self.db.begin().await?;

        // The first address a user saves is always their default.
        let is_default =
            address.is_default || self.repository.count_addresses(&mut tx, user).await? == 0;

        if is_default {
            self.repository.unset_defaults(&mut tx, user).await?;
        }

        let stored = self
            .repository
            .insert_address(&mut tx, user, &address.fields, is_default)
            .await?;

        tx.commit().await?;

        Ok(stored)
    }

    async fn list_addresses(&self, user: &UserId) -> Result<Vec<Address>, AddressesServiceError> {
        let mut tx = self.db.begin().await?;

        let addresses = self.repository.list_addresses(&mut tx, user).await?;

        tx.commit().await?;

        Ok(addresses)
    }

    async fn get_address(
        &self,
        user: &UserId,
        id: Uuid,
    ) -> Result<Address, AddressesServiceError> {
        let mut tx = self.db.begin().await?;

        let address = self.repository.get_address(&mut tx, user, id).await?;

        tx.commit().await?;

        Ok(address)
    }

    async fn update_address(
        &self,
        user: &UserId,
        id: Uuid,
        update: AddressUpdate,
    ) -> Result<Address, AddressesServiceError> {
        if update.is_empty() {
            return Err(AddressesServiceError::NothingToUpdate);
        }

        if let Some(fields) = &update.fields {
            let missing = fields.missing_fields();

            if !missing.is_empty() {
                return Err(AddressesServiceError::InvalidAddress(missing));
            }
        }

        let mut tx = self.db.begin().await?;

        let current = self.repository.get_address(&mut tx, user, id).await?;
        let is_default = update.is_default.unwrap_or(current.is_default);

        if is_default && !current.is_default {
            self.repository.unset_defaults(&mut tx, user).await?;
        }

        let fields = update.fields.unwrap_or_else(|| current.fields());

        let updated = self
            .repository
            .update_address(&mut tx, user, id, &fields, is_default)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn remove_address(&self, user: &UserId, id: Uuid) -> Result<(), AddressesServiceError> {
        let mut tx = self.db.begin().await?;

        let address = self.repository.get_address(&mut tx, user, id).await?;

        self.repository.delete_address(&mut tx, user, id).await?;

        // Deleting the default hands the flag to the oldest remaining
        // address so the user never ends up without one.
        if address.is_default {
            self.repository.promote_oldest(&mut tx, user).await?;
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait AddressesService: Send + Sync {
    /// Save a new address; a user's first address becomes the default.
    async fn add_address(
        &self,
        user: &UserId,
        address: NewAddress,
    ) -> Result<Address, AddressesServiceError>;

    /// All of the user's addresses, default first, then newest first.
    async fn list_addresses(&self, user: &UserId) -> Result<Vec<Address>, AddressesServiceError>;

    /// One address owned by the user.
    async fn get_address(&self, user: &UserId, id: Uuid)
    -> Result<Address, AddressesServiceError>;

    /// Replace an address's fields and optionally its default flag.
    async fn update_address(
        &self,
        user: &UserId,
        id: Uuid,
        update: AddressUpdate,
    ) -> Result<Address, AddressesServiceError>;

    /// Delete an address, promoting a replacement default when needed.
    async fn remove_address(&self, user: &UserId, id: Uuid) -> Result<(), AddressesServiceError>;
}
