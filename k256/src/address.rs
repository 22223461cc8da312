//! Networks and pay-to-public-key-hash addresses.

use crate::{base58, ecdsa::VerifyingKey, hash::hash160, Error, Result};
use alloc::{string::String, vec::Vec};

/// Bitcoin network, which selects the version bytes of addresses and WIF
/// keys.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Network {
    /// Main network.
    #[default]
    Mainnet,

    /// Test network.
    Testnet,
}

impl Network {
    /// Version byte of P2PKH addresses.
    pub const fn p2pkh_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Version byte of WIF private keys.
    pub const fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    /// Network using `prefix` as its P2PKH version byte.
    pub fn from_p2pkh_prefix(prefix: u8) -> Option<Self> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find(|network| network.p2pkh_prefix() == prefix)
    }

    /// Network using `prefix` as its WIF version byte.
    pub fn from_wif_prefix(prefix: u8) -> Option<Self> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find(|network| network.wif_prefix() == prefix)
    }
}

/// P2PKH address: Base58Check of the version byte followed by the hash160
/// of the key's SEC1 encoding.
pub fn p2pkh_address(key: &VerifyingKey, network: Network, compressed: bool) -> String {
    let mut payload = Vec::with_capacity(21);
    payload.push(network.p2pkh_prefix());
    payload.extend_from_slice(&hash160(&key.to_sec1_bytes(compressed)));
    base58::encode_check(&payload)
}

/// Parse a P2PKH address into its network and 20-byte public key hash.
pub fn decode_p2pkh_address(address: &str) -> Result<(Network, [u8; 20])> {
    let payload = base58::decode_check(address)?;
    let (&prefix, hash) = payload.split_first().ok_or(Error::InvalidAddress)?;
    let network = Network::from_p2pkh_prefix(prefix).ok_or(Error::InvalidAddress)?;
    let hash = hash.try_into().map_err(|_| Error::InvalidAddress)?;
    Ok((network, hash))
}

#[cfg(test)]
mod tests {
    use super::{decode_p2pkh_address, p2pkh_address, Network};
    use crate::{base58, ecdsa::SigningKey, test_vectors::encoding::ADDRESS_TEST_VECTORS, Error};
    use alloc::vec;
    use num_bigint::BigUint;

    #[test]
    fn prefixes() {
        for network in [Network::Mainnet, Network::Testnet] {
            assert_eq!(
                Network::from_p2pkh_prefix(network.p2pkh_prefix()),
                Some(network)
            );
            assert_eq!(Network::from_wif_prefix(network.wif_prefix()), Some(network));
        }
        assert_eq!(Network::from_p2pkh_prefix(0x05), None);
    }

    #[test]
    fn known_addresses() {
        for vector in ADDRESS_TEST_VECTORS {
            let key = SigningKey::from_secret(&BigUint::from_bytes_be(vector.secret)).unwrap();
            let address = p2pkh_address(key.verifying_key(), vector.network, vector.compressed);
            assert_eq!(address, vector.address);

            let (network, _) = decode_p2pkh_address(&address).unwrap();
            assert_eq!(network, vector.network);
        }
    }

    #[test]
    fn decodes_hash160() {
        let (network, hash) = decode_p2pkh_address("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH").unwrap();
        assert_eq!(network, Network::Mainnet);
        assert_eq!(hash, hex_literal::hex!("751e76e8199196d454941c45d1b3a323f1433bd6"));
    }

    #[test]
    fn rejects_unknown_version_and_length() {
        let mut payload = vec![0x05];
        payload.extend_from_slice(&[0u8; 20]);
        assert_eq!(
            decode_p2pkh_address(&base58::encode_check(&payload)),
            Err(Error::InvalidAddress)
        );

        assert_eq!(
            decode_p2pkh_address(&base58::encode_check(&[0x00; 20])),
            Err(Error::InvalidAddress)
        );
        assert_eq!(
            decode_p2pkh_address(&base58::encode_check(&[])),
            Err(Error::InvalidAddress)
        );
    }
}
