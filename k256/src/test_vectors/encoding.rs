//! SEC1, address and WIF test vectors

use crate::Network;
use hex_literal::hex;

/// Public key `secret·G` in SEC1 form.
pub struct Sec1Vector {
    pub secret: &'static [u8],
    pub compressed: bool,
    pub encoded: &'static [u8],
}

/// P2PKH address of `secret·G`.
pub struct AddressVector {
    pub secret: &'static [u8],
    pub network: Network,
    pub compressed: bool,
    pub address: &'static str,
}

/// WIF encoding of `secret`.
pub struct WifVector {
    pub secret: &'static [u8],
    pub network: Network,
    pub compressed: bool,
    pub wif: &'static str,
}

pub const SEC1_TEST_VECTORS: &[Sec1Vector] = &[
    Sec1Vector {
        secret: &hex!("0000000000000000000000000000000000000000000000000000000000001388"),
        compressed: false,
        encoded: &hex!(
            "04ffe558e388852f0120e46af2d1b370f85854a8eb0841811ece0e3e03d282d57c"
            "315dc72890a4f10a1481c031b03b351b0dc79901ca18a00cf009dbdb157a1d10"
        ),
    },
    Sec1Vector {
        secret: &hex!("0000000000000000000000000000000000000000000000000000000000001389"),
        compressed: true,
        encoded: &hex!("0357a4f368868a8a6d572991e484e664810ff14c05c0fa023275251151fe0e53d1"),
    },
    Sec1Vector {
        secret: &hex!("000000000000000000000000000000000000000000000000007730c781f7ae53"),
        compressed: true,
        encoded: &hex!("02933ec2d2b111b92737ec12f1c5d20f3233a0ad21cd8b36d0bca7a0cfa5cb8701"),
    },
    Sec1Vector {
        secret: &hex!("000000000000000000000000000000000000000000000000000deadbeef12345"),
        compressed: false,
        encoded: &hex!(
            "04d90cd625ee87dd38656dd95cf79f65f60f7273b67d3096e68bd81e4f5342691f"
            "842efa762fd59961d0e99803c61edba8b3e3f7dc3a341836f97733aebf987121"
        ),
    },
];

pub const ADDRESS_TEST_VECTORS: &[AddressVector] = &[
    AddressVector {
        secret: &hex!("000000000000000000000000000000000000000000000000000000000000138a"),
        network: Network::Testnet,
        compressed: false,
        address: "mmTPbXQFxboEtNRkwfh6K51jvdtHLxGeMA",
    },
    AddressVector {
        secret: &hex!("00000000000000000000000000000000000000000000000000777c6b16216400"),
        network: Network::Testnet,
        compressed: true,
        address: "mopVkxp8UhXqRYbCYJsbeE1h1fiF64jcoH",
    },
    AddressVector {
        secret: &hex!("00000000000000000000000000000000000000000000000000012345deadbeef"),
        network: Network::Mainnet,
        compressed: true,
        address: "1F1Pn2y6pDb68E5nYJJeba4TLg2U7B6KF1",
    },
    AddressVector {
        secret: &hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        network: Network::Mainnet,
        compressed: true,
        address: "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH",
    },
    AddressVector {
        secret: &hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        network: Network::Mainnet,
        compressed: false,
        address: "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm",
    },
];

pub const WIF_TEST_VECTORS: &[WifVector] = &[
    WifVector {
        secret: &hex!("000000000000000000000000000000000000000000000000000000000000138b"),
        network: Network::Testnet,
        compressed: true,
        wif: "cMahea7zqjxrtgAbB7LSGbcQUr1uX1ojuat9jZodMN8rFTv2sfUK",
    },
    WifVector {
        secret: &hex!("0000000000000000000000000000000000000000000000000077c8350c02b595"),
        network: Network::Testnet,
        compressed: false,
        wif: "91avARGdfge8E4tZfYLoxeJ5sGBdNJQH4kvjpWAxgzczjbCwxic",
    },
    WifVector {
        secret: &hex!("00000000000000000000000000000000000000000000000000054321deadbeef"),
        network: Network::Mainnet,
        compressed: true,
        wif: "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgiuQJv1h8Ytr2S53a",
    },
    WifVector {
        secret: &hex!("0000000000000000000000000000000000000000000000000000000000000001"),
        network: Network::Mainnet,
        compressed: true,
        wif: "KwDiBf89QgGbjEhKnhXJuH7LrciVrZi3qYjgd9M7rFU73sVHnoWn",
    },
];
