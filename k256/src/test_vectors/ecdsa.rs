//! ECDSA/secp256k1 test vectors

use hex_literal::hex;

/// Signature produced from an explicit nonce.
pub struct NonceVector {
    pub d: &'static [u8],
    pub q_x: &'static [u8],
    pub q_y: &'static [u8],
    pub k: &'static [u8],
    pub m: &'static [u8],
    pub r: &'static [u8],
    pub s: &'static [u8],
}

/// Signature expected to verify under a public key.
pub struct VerifyVector {
    pub q_x: &'static [u8],
    pub q_y: &'static [u8],
    pub z: &'static [u8],
    pub r: &'static [u8],
    pub s: &'static [u8],
}

/// ECDSA/secp256k1 test vectors
pub const NONCE_TEST_VECTORS: &[NonceVector] = &[NonceVector {
    d: &hex!("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f"),
    q_x: &hex!("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd"),
    q_y: &hex!("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"),
    k: &hex!("49a0d7b786ec9cde0d0721d72804befd06571c974b191efb42ecf322ba9ddd9a"),
    m: &hex!("4b688df40bcedbe641ddb16ff0a1842d9c67ea1c3bf63f3e0471baa664531d1a"),
    r: &hex!("241097efbf8b63bf145c8961dbdf10c310efbb3b2676bbc0f8b08505c9e2f795"),
    s: &hex!("021006b7838609339e8b415a7f9acb1b661828131aef1ecbc7955dfb01f3ca0e"),
}];

/// Signatures over known digests, all valid.
pub const VERIFY_TEST_VECTORS: &[VerifyVector] = &[
    VerifyVector {
        q_x: &hex!("04519fac3d910ca7e7138f7013706f619fa8f033e6ec6e09370ea38cee6a7574"),
        q_y: &hex!("82b51eab8c27c66e26c858a079bcdf4f1ada34cec420cafc7eac1a42216fb6c4"),
        z: &hex!("bc62d4b80d9e36da29c16c5d4d9f11731f36052c72401a76c23c0fb5a9b74423"),
        r: &hex!("37206a0610995c58074999cb9767b87af4c4978db68c06e8e6e81d282047a7c6"),
        s: &hex!("8ca63759c1157ebeaec0d03cecca119fc9a75bf8e6d0fa65c841c8e2738cdaec"),
    },
    VerifyVector {
        q_x: &hex!("887387e452b8eacc4acfde10d9aaf7f6d9a0f975aabb10d006e4da568744d06c"),
        q_y: &hex!("61de6d95231cd89026e286df3b6ae4a894a3378e393e93a0f45b666329a0ae34"),
        z: &hex!("ec208baa0fc1c19f708a9ca96fdeff3ac3f230bb4a7ba4aede4942ad003c0f60"),
        r: &hex!("ac8d1c87e51d0d441be8b3dd5b05c8795b48875dffe00b7ffcfac23010d3a395"),
        s: &hex!("068342ceff8935ededd102dd876ffd6ba72d6a427a3edb13d26eb0781cb423c4"),
    },
    VerifyVector {
        q_x: &hex!("887387e452b8eacc4acfde10d9aaf7f6d9a0f975aabb10d006e4da568744d06c"),
        q_y: &hex!("61de6d95231cd89026e286df3b6ae4a894a3378e393e93a0f45b666329a0ae34"),
        z: &hex!("7c076ff316692a3d7eb3c3bb0f8b1488cf72e1afcd929e29307032997a838a3d"),
        r: &hex!("00eff69ef2b1bd93a66ed5219add4fb51e11a840f404876325a1e8ffe0529a2c"),
        s: &hex!("c7207fee197d27c618aea621406f6bf5ef6fca38681d82b2f06fddbdce6feab6"),
    },
];

/// RFC6979 nonce for `d = 1` and `z = SHA256("Satoshi Nakamoto")`, with the
/// resulting low-S signature.
pub const RFC6979_SATOSHI: (&[u8], &[u8], &[u8]) = (
    &hex!("8f8a276c19f4149656b280621e358cce24f5f52542772691ee69063b74f15d15"),
    &hex!("934b1ea10a4b3c1757e2b0c017d0b6143ce3c9a7e6a4a49860d7a6ab210ee3d8"),
    &hex!("2442ce9d2b916064108014783e923ec36b49743e2ffa1c4496f01a512aafd9e5"),
);
