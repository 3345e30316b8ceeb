use crate::interface::RegistryClient;
use soroban_sdk::xdr::{FromXdr, ToXdr};
use soroban_sdk::{Address, Bytes, Env, IntoVal, Symbol, TryFromVal, Val};

/// Typed view over one namespace of a registry.
///
/// Keys and values are stored as their XDR encoding, so any contract type can be used on either
/// side. Writes are made with the grant of the contract that is currently executing.
pub struct Namespace<'a> {
    registry: RegistryClient<'a>,
    name: Symbol,
}

impl<'a> Namespace<'a> {
    pub fn new(env: &Env, registry: &Address, name: &str) -> Self {
        Self {
            registry: RegistryClient::new(env, registry),
            name: Symbol::new(env, name),
        }
    }

    fn env(&self) -> &Env {
        &self.registry.env
    }

    fn encode<T>(&self, value: &T) -> Bytes
    where
        T: IntoVal<Env, Val> + Clone,
    {
        value.clone().to_xdr(self.env())
    }

    pub fn get<K, V>(&self, key: &K) -> Option<V>
    where
        K: IntoVal<Env, Val> + Clone,
        V: TryFromVal<Env, Val>,
    {
        self.registry
            .get(&self.name, &self.encode(key))
            .map(|value| {
                V::from_xdr(self.env(), &value)
                    .unwrap_or_else(|_| panic!("malformed registry entry"))
            })
    }

    pub fn has<K>(&self, key: &K) -> bool
    where
        K: IntoVal<Env, Val> + Clone,
    {
        self.registry.get(&self.name, &self.encode(key)).is_some()
    }

    pub fn set<K, V>(&self, key: &K, value: &V)
    where
        K: IntoVal<Env, Val> + Clone,
        V: IntoVal<Env, Val> + Clone,
    {
        self.registry.set(
            &self.env().current_contract_address(),
            &self.name,
            &self.encode(key),
            &self.encode(value),
        );
    }

    pub fn remove<K>(&self, key: &K)
    where
        K: IntoVal<Env, Val> + Clone,
    {
        self.registry.remove(
            &self.env().current_contract_address(),
            &self.name,
            &self.encode(key),
        );
    }
}
