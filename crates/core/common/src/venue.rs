//! Static venue table: identifiers, fees, leverage, and instrument support
//!
//! The table is versioned data transcribed from venue documentation. It is
//! immutable after initialization; name resolution is case-sensitive exact
//! match and unknown names resolve to `None` rather than a sentinel variant.

use crate::instrument::{InstrumentMask, InstrumentType};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Venue identifiers, one per supported exchange.
///
/// Discriminants index the static config table. The first block (through
/// `Zebpay`) lists venues with derivatives; the rest are spot-only.
#[allow(missing_docs)]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Venue {
    Apex = 0,
    Arkham,
    Ascendex,
    Backpack,
    Bigone,
    Binance,
    BinanceCoinm,
    BinanceUsdm,
    Bingx,
    Bitfinex,
    Bitflyer,
    Bitget,
    Bitmart,
    Bitmex,
    Bitrue,
    Blofin,
    Bullish,
    Bybit,
    Coinbase,
    CoinbaseAdvanced,
    CoinbaseInternational,
    Coincatch,
    Coinex,
    Cryptocom,
    Deepcoin,
    Defx,
    Delta,
    Deribit,
    Derive,
    Digifinex,
    Dydx,
    Fmfwio,
    Gate,
    Gateio,
    Gemini,
    Hashkey,
    Hibachi,
    Hitbtc,
    Htx,
    Huobi,
    Hyperliquid,
    KrakenFutures,
    KucoinFutures,
    Lbank,
    Mexc,
    Modetrade,
    Myokx,
    Okx,
    Okxus,
    Onetrading,
    Paradex,
    Phemex,
    Poloniex,
    Toobit,
    Whitebit,
    WoofiPro,
    Xt,
    Zebpay,
    Alpaca,
    Bequant,
    BinanceUs,
    Bit2c,
    Bitbank,
    Bitbns,
    Bithumb,
    Bitopro,
    Bitso,
    Bitstamp,
    Bitteam,
    Bittrade,
    Bitvavo,
    Blockchaincom,
    Btcalpha,
    Btcbox,
    BtcMarkets,
    Btcturk,
    Cex,
    CoinbaseExchange,
    Coincheck,
    Coinmate,
    Coinmetro,
    Coinone,
    Coinsph,
    Coinspot,
    Cryptomus,
    Exmo,
    Foxbit,
    Hollaex,
    IndependentReserve,
    Indodax,
    Kraken,
    Kucoin,
    Latoken,
    Luno,
    Mercado,
    Ndax,
    Novadax,
    Oceanex,
    Oxfun,
    P2b,
    Paymium,
    Probit,
    Timex,
    Tokocrypto,
    Upbit,
    WavesExchange,
    Woo,
    Yobit,
    Zaif,
    Zonda,
}

/// Immutable per-venue configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VenueConfig {
    /// Venue this row describes
    pub venue: Venue,
    /// Canonical lowercase name
    pub name: &'static str,
    /// Spot market symbol in the venue's own notation
    pub spot_symbol: &'static str,
    /// Primary derivative symbol, empty for spot-only venues
    pub deriv_symbol: &'static str,
    /// Default taker fee as a fraction (0.001 = 10 bps)
    pub taker_fee: f64,
    /// Maximum leverage offered
    pub max_leverage: u32,
    /// Whether the venue offers streaming book updates
    pub streaming: bool,
    /// Instrument classes the venue supports
    pub supported: InstrumentMask,
}

impl VenueConfig {
    /// Taker fee in percentage points (0.001 fraction = 0.1%)
    #[must_use]
    pub fn taker_fee_pct(&self) -> f64 {
        self.taker_fee * 100.0
    }
}

// Mask shorthand for the table below
const S: u8 = 1 << InstrumentType::Spot as u8;
const M: u8 = 1 << InstrumentType::Margin as u8;
const P: u8 = 1 << InstrumentType::Perpetual as u8;
const F: u8 = 1 << InstrumentType::Future as u8;
const O: u8 = 1 << InstrumentType::Option as u8;
const I: u8 = 1 << InstrumentType::Inverse as u8;
const L: u8 = 1 << InstrumentType::LeveragedToken as u8;

#[allow(clippy::too_many_arguments)]
const fn vc(
    venue: Venue,
    name: &'static str,
    spot_symbol: &'static str,
    deriv_symbol: &'static str,
    taker_fee: f64,
    max_leverage: u32,
    streaming: bool,
    supported: u8,
) -> VenueConfig {
    VenueConfig {
        venue,
        name,
        spot_symbol,
        deriv_symbol,
        taker_fee,
        max_leverage,
        streaming,
        supported: InstrumentMask(supported),
    }
}

/// Static configuration rows, indexed by venue discriminant
pub static VENUE_CONFIGS: [VenueConfig; Venue::COUNT] = [
    vc(Venue::Apex, "apex", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::Arkham, "arkham", "BTC/USDT", "BTC/USDT:USDT", 0.003, 50, false, S | P),
    vc(Venue::Ascendex, "ascendex", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::Backpack, "backpack", "BTC/USDC", "BTC/USDC:USDC", 0.002, 50, true, S | P),
    vc(Venue::Bigone, "bigone", "BTC/USDT", "BTC/USD:BTC", 0.002, 100, true, S | P),
    vc(Venue::Binance, "binance", "BTC/USDT", "BTC/USDT:USDT", 0.001, 125, true, S | M | P | F | I | L),
    vc(Venue::BinanceCoinm, "binancecoinm", "BTC/USD", "BTC/USD:BTC", 0.001, 125, true, P | F | I),
    vc(Venue::BinanceUsdm, "binanceusdm", "BTC/USDT", "BTC/USDT:USDT", 0.001, 125, true, P | F),
    vc(Venue::Bingx, "bingx", "BTC/USDT", "BTC/USDT:USDT", 0.002, 150, true, S | P),
    vc(Venue::Bitfinex, "bitfinex", "BTC/USD", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::Bitflyer, "bitflyer", "BTC/JPY", "BTC/JPY:JPY", 0.002, 4, true, S | P),
    vc(Venue::Bitget, "bitget", "BTC/USDT", "BTC/USDT:USDT", 0.002, 125, true, S | M | P | F),
    vc(Venue::Bitmart, "bitmart", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::Bitmex, "bitmex", "XBTUSD", "BTC/USD:BTC", 0.001, 100, true, P | F | I),
    vc(Venue::Bitrue, "bitrue", "BTC/USDT", "BTC/USDT:USDT", 0.002, 125, true, S | P),
    vc(Venue::Blofin, "blofin", "BTC/USDT", "BTC/USDC:USDC", 0.002, 150, true, S | P),
    vc(Venue::Bullish, "bullish", "BTC/USDC", "BTC/USDC:USDC", 0.002, 20, true, S | P),
    vc(Venue::Bybit, "bybit", "BTC/USDT", "BTC/USDT:USDT", 0.001, 100, true, S | P | F | O | I),
    vc(Venue::Coinbase, "coinbase", "BTC/USD", "BTC/USD:USD", 0.005, 10, true, S | P),
    vc(Venue::CoinbaseAdvanced, "coinbaseadvanced", "BTC/USD", "BTC/USD:USD", 0.005, 10, true, S | P),
    vc(Venue::CoinbaseInternational, "coinbaseinternational", "BTC/USDC", "BTC/USDC:USDC", 0.002, 10, true, S | P),
    vc(Venue::Coincatch, "coincatch", "BTC/USDT", "BTC/USDT:USDT", 0.002, 125, true, S | P),
    vc(Venue::Coinex, "coinex", "BTC/USDT", "BTC/USDC:USDT", 0.002, 100, true, S | P),
    vc(Venue::Cryptocom, "cryptocom", "BTC/USD", "BTC/USD:USD", 0.002, 50, true, S | P),
    vc(Venue::Deepcoin, "deepcoin", "BTC/USDT", "BTC/USD:BTC", 0.002, 125, true, S | P),
    vc(Venue::Defx, "defx", "BTC/USDC", "BTC/USDC:USDC", 0.002, 50, false, S | P),
    vc(Venue::Delta, "delta", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::Deribit, "deribit", "BTC-PERPETUAL", "BTC/USD:BTC", 0.001, 50, true, P | F | O | I),
    vc(Venue::Derive, "derive", "BTC/USD", "BTC/USD:USD", 0.002, 20, false, S | P),
    vc(Venue::Digifinex, "digifinex", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::Dydx, "dydx", "BTC/USD", "BTC/USD:USD", 0.001, 20, true, P),
    vc(Venue::Fmfwio, "fmfwio", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::Gate, "gate", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | M | P | F | O | L),
    vc(Venue::Gateio, "gateio", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | M | P | F | O | L),
    vc(Venue::Gemini, "gemini", "BTC/USD", "BTC/GUSD:GUSD", 0.004, 100, true, S | P),
    vc(Venue::Hashkey, "hashkey", "BTC/USDT", "BTC/USDT:USDT", 0.002, 50, true, S | P),
    vc(Venue::Hibachi, "hibachi", "BTC/USDT", "BTC/USDT:USDT", 0.002, 50, true, S | P),
    vc(Venue::Hitbtc, "hitbtc", "BTC/USDT", "BTC/USDT:USDT", 0.002, 75, true, S | P),
    vc(Venue::Htx, "htx", "btcusdt", "BTC/USDT:USDT", 0.002, 200, true, S | M | P | F | I),
    vc(Venue::Huobi, "huobi", "btcusdt", "BTC/USDT:USDT", 0.002, 200, true, S | M | P | F | I),
    vc(Venue::Hyperliquid, "hyperliquid", "BTC/USDC", "BTC/USDC:USDC", 0.001, 50, true, P),
    vc(Venue::KrakenFutures, "krakenfutures", "PI_XBTUSD", "BTC/USD:BTC", 0.002, 50, true, P | F | I),
    vc(Venue::KucoinFutures, "kucoinfutures", "XBTUSDTM", "BTC/USDT:USDT", 0.002, 100, true, P | F | I),
    vc(Venue::Lbank, "lbank", "BTC/USDT", "BTC/USDT:USDT", 0.002, 125, true, S | P),
    vc(Venue::Mexc, "mexc", "BTC/USDT", "BTC/USDT:USDT", 0.002, 200, true, S | M | P | F | L),
    vc(Venue::Modetrade, "modetrade", "BTC/USDT", "BTC/USDT:USDT", 0.002, 50, false, S | P),
    vc(Venue::Myokx, "myokx", "BTC/USDT", "BTC/USD:BTC", 0.001, 125, true, S | P),
    vc(Venue::Okx, "okx", "BTC/USDT", "BTC/USDT:USDT", 0.001, 125, true, S | M | P | F | O | I),
    vc(Venue::Okxus, "okxus", "BTC/USDT", "BTC/USD:BTC", 0.001, 125, true, S | P),
    vc(Venue::Onetrading, "onetrading", "BTC/EUR", "BTC/EUR:EUR", 0.002, 5, true, S | P),
    vc(Venue::Paradex, "paradex", "BTC/USD", "BTC/USD:USDC", 0.002, 20, true, S | P),
    vc(Venue::Phemex, "phemex", "BTCUSD", "BTC/USD:BTC", 0.002, 100, true, S | P | F | I),
    vc(Venue::Poloniex, "poloniex", "BTC_USDT", "BTC/USDT:USDT", 0.003, 75, true, S | P),
    vc(Venue::Toobit, "toobit", "BTC/USDT", "BTC/USDT:USDT", 0.002, 150, true, S | P),
    vc(Venue::Whitebit, "whitebit", "BTC/USDT", "BTC/USDT:USDT", 0.002, 100, true, S | P),
    vc(Venue::WoofiPro, "woofipro", "BTC/USDT", "BTC/USDT:USDT", 0.002, 20, true, S | P),
    vc(Venue::Xt, "xt", "BTC/USDT", "BTC/USDT:USDT", 0.002, 125, true, S | P),
    vc(Venue::Zebpay, "zebpay", "BTC/USDT", "BTC/USDT:USDT", 0.005, 75, false, S | P),
    vc(Venue::Alpaca, "alpaca", "BTC/USD", "", 0.002, 1, true, S),
    vc(Venue::Bequant, "bequant", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::BinanceUs, "binanceus", "BTC/USD", "", 0.001, 1, true, S),
    vc(Venue::Bit2c, "bit2c", "BTC/NIS", "", 0.005, 1, false, S),
    vc(Venue::Bitbank, "bitbank", "BTC/JPY", "", 0.002, 1, true, S),
    vc(Venue::Bitbns, "bitbns", "BTC/INR", "", 0.005, 1, false, S),
    vc(Venue::Bithumb, "bithumb", "BTC/KRW", "", 0.002, 1, true, S),
    vc(Venue::Bitopro, "bitopro", "BTC/TWD", "", 0.002, 1, true, S),
    vc(Venue::Bitso, "bitso", "BTC/MXN", "", 0.005, 1, true, S),
    vc(Venue::Bitstamp, "bitstamp", "BTC/USD", "", 0.005, 1, true, S),
    vc(Venue::Bitteam, "bitteam", "BTC/USDT", "", 0.002, 1, false, S),
    vc(Venue::Bittrade, "bittrade", "BTC/JPY", "", 0.002, 1, false, S),
    vc(Venue::Bitvavo, "bitvavo", "BTC/EUR", "", 0.002, 1, true, S),
    vc(Venue::Blockchaincom, "blockchaincom", "BTC/USD", "", 0.002, 1, true, S),
    vc(Venue::Btcalpha, "btcalpha", "BTC/USDT", "", 0.002, 1, false, S),
    vc(Venue::Btcbox, "btcbox", "BTC/JPY", "", 0.002, 1, false, S),
    vc(Venue::BtcMarkets, "btcmarkets", "BTC/AUD", "", 0.002, 1, true, S),
    vc(Venue::Btcturk, "btcturk", "BTC/TRY", "", 0.002, 1, true, S),
    vc(Venue::Cex, "cex", "BTC/USD", "", 0.002, 1, true, S),
    vc(Venue::CoinbaseExchange, "coinbaseexchange", "BTC/USD", "", 0.005, 1, true, S),
    vc(Venue::Coincheck, "coincheck", "BTC/JPY", "", 0.002, 1, true, S),
    vc(Venue::Coinmate, "coinmate", "BTC/EUR", "", 0.002, 1, true, S),
    vc(Venue::Coinmetro, "coinmetro", "BTC/EUR", "", 0.002, 1, true, S),
    vc(Venue::Coinone, "coinone", "BTC/KRW", "", 0.002, 1, false, S),
    vc(Venue::Coinsph, "coinsph", "BTC/PHP", "", 0.002, 1, false, S),
    vc(Venue::Coinspot, "coinspot", "BTC/AUD", "", 0.005, 1, false, S),
    vc(Venue::Cryptomus, "cryptomus", "BTC/USDT", "", 0.002, 1, false, S),
    vc(Venue::Exmo, "exmo", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Foxbit, "foxbit", "BTC/BRL", "", 0.002, 1, false, S),
    vc(Venue::Hollaex, "hollaex", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::IndependentReserve, "independentreserve", "BTC/AUD", "", 0.005, 1, false, S),
    vc(Venue::Indodax, "indodax", "BTC/IDR", "", 0.003, 1, true, S),
    vc(Venue::Kraken, "kraken", "BTC/USD", "", 0.002, 1, true, S | M),
    vc(Venue::Kucoin, "kucoin", "BTC/USDT", "", 0.002, 1, true, S | M | L),
    vc(Venue::Latoken, "latoken", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Luno, "luno", "BTC/ZAR", "", 0.002, 1, true, S),
    vc(Venue::Mercado, "mercado", "BTC/BRL", "", 0.003, 1, false, S),
    vc(Venue::Ndax, "ndax", "BTC/CAD", "", 0.002, 1, true, S),
    vc(Venue::Novadax, "novadax", "BTC/BRL", "", 0.002, 1, true, S),
    vc(Venue::Oceanex, "oceanex", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Oxfun, "oxfun", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::P2b, "p2b", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Paymium, "paymium", "BTC/EUR", "", 0.005, 1, false, S),
    vc(Venue::Probit, "probit", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Timex, "timex", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Tokocrypto, "tokocrypto", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Upbit, "upbit", "BTC/KRW", "", 0.002, 1, true, S),
    vc(Venue::WavesExchange, "wavesexchange", "BTC/WAVES", "", 0.002, 1, true, S),
    vc(Venue::Woo, "woo", "BTC/USDT", "", 0.002, 1, true, S),
    vc(Venue::Yobit, "yobit", "BTC/USDT", "", 0.002, 1, false, S),
    vc(Venue::Zaif, "zaif", "BTC/JPY", "", 0.002, 1, true, S),
    vc(Venue::Zonda, "zonda", "BTC/PLN", "", 0.002, 1, true, S),
];

impl Venue {
    /// Number of venues in the table
    pub const COUNT: usize = 110;

    /// Index into flat per-venue arrays
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Configuration row for this venue
    #[must_use]
    pub fn config(self) -> &'static VenueConfig {
        &VENUE_CONFIGS[self as usize]
    }

    /// Canonical lowercase name
    #[must_use]
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Whether the venue supports an instrument class
    #[must_use]
    pub fn supports(self, ty: InstrumentType) -> bool {
        self.config().supported.contains(ty)
    }

    /// Resolve a canonical name. Case-sensitive exact match; unknown names
    /// are `None`, never a sentinel.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        static BY_NAME: OnceLock<FxHashMap<&'static str, Venue>> = OnceLock::new();
        let map = BY_NAME.get_or_init(|| VENUE_CONFIGS.iter().map(|c| (c.name, c.venue)).collect());
        map.get(name).copied()
    }

    /// Venue at a table index, `None` when out of range
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        VENUE_CONFIGS.get(index).map(|c| c.venue)
    }

    /// Iterate every venue in table order
    pub fn all() -> impl Iterator<Item = Self> {
        VENUE_CONFIGS.iter().map(|c| c.venue)
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trading symbol a venue uses for an instrument class, `None` when the
/// class is unsupported there.
///
/// Venues with rich derivative listings carry explicit per-class symbols;
/// the rest fall back to their spot and primary derivative symbols.
#[must_use]
pub fn instrument_symbol(venue: Venue, ty: InstrumentType) -> Option<&'static str> {
    use InstrumentType::{
        Future, Inverse, LeveragedToken, Margin, Option as OptionInst, Perpetual, Spot,
    };
    let symbol = match (venue, ty) {
        (Venue::Okx, Spot | Margin) => "BTC-USDT",
        (Venue::Okx, Perpetual) => "BTC-USDT-SWAP",
        (Venue::Okx, Future) => "BTC-USDT-250328",
        (Venue::Okx, OptionInst) => "BTC-USD-250328-100000-C",
        (Venue::Okx, Inverse) => "BTC-USD-SWAP",

        (Venue::Bybit, Spot | Perpetual) => "BTCUSDT",
        (Venue::Bybit, Future) => "BTCUSDT-28MAR25",
        (Venue::Bybit, OptionInst) => "BTC-28MAR25-100000-C",
        (Venue::Bybit, Inverse) => "BTCUSD",

        (Venue::Deribit, Perpetual | Inverse) => "BTC-PERPETUAL",
        (Venue::Deribit, Future) => "BTC-28MAR25",
        (Venue::Deribit, OptionInst) => "BTC-28MAR25-100000-C",

        (Venue::Gate | Venue::Gateio, Spot | Margin | Perpetual) => "BTC_USDT",
        (Venue::Gate | Venue::Gateio, Future) => "BTC_USDT_20250328",
        (Venue::Gate | Venue::Gateio, OptionInst) => "BTC_USDT-20250328-100000-C",
        (Venue::Gate | Venue::Gateio, LeveragedToken) => "BTC3L_USDT",

        (Venue::Binance, Spot | Margin | Perpetual) => "BTCUSDT",
        (Venue::Binance, Future) => "BTCUSDT_250328",
        (Venue::Binance, Inverse) => "BTCUSD_PERP",
        (Venue::Binance, LeveragedToken) => "BTCUP",

        (Venue::BinanceCoinm, Perpetual | Inverse) => "BTCUSD_PERP",
        (Venue::BinanceCoinm, Future) => "BTCUSD_250328",

        (Venue::BinanceUsdm, Perpetual) => "BTCUSDT",
        (Venue::BinanceUsdm, Future) => "BTCUSDT_250328",

        (Venue::Bitget, Spot | Margin) => "BTCUSDT",
        (Venue::Bitget, Perpetual) => "BTCUSDT_UMCBL",
        (Venue::Bitget, Future) => "BTCUSDT_DMCBL",

        (Venue::Mexc, Spot | Margin) => "BTCUSDT",
        (Venue::Mexc, Perpetual | Future) => "BTC_USDT",
        (Venue::Mexc, LeveragedToken) => "BTC3L_USDT",

        (Venue::Htx | Venue::Huobi, Spot | Margin) => "btcusdt",
        (Venue::Htx | Venue::Huobi, Perpetual) => "BTC-USDT",
        (Venue::Htx | Venue::Huobi, Future) => "BTC_CQ",
        (Venue::Htx | Venue::Huobi, Inverse) => "BTC-USD",

        (Venue::Bitmex, Perpetual | Inverse) => "XBTUSD",
        (Venue::Bitmex, Future) => "XBTM25",

        (Venue::KrakenFutures, Perpetual | Inverse) => "PI_XBTUSD",
        (Venue::KrakenFutures, Future) => "FI_XBTUSD_250328",

        (Venue::KucoinFutures, Perpetual | Future) => "XBTUSDTM",
        (Venue::KucoinFutures, Inverse) => "XBTUSDM",

        (Venue::Phemex, Spot) => "sBTCUSDT",
        (Venue::Phemex, Perpetual | Future | Inverse) => "BTCUSD",

        (Venue::Hyperliquid, Perpetual) => "BTC",
        (Venue::Dydx, Perpetual) => "BTC-USD",

        (Venue::Kraken, Spot | Margin) => "XXBTZUSD",

        (Venue::Kucoin, Spot | Margin) => "BTC-USDT",
        (Venue::Kucoin, LeveragedToken) => "BTC3L-USDT",

        _ => {
            let config = venue.config();
            return match ty {
                Spot if config.supported.contains(Spot) => Some(config.spot_symbol),
                Perpetual if config.supported.contains(Perpetual) => Some(config.deriv_symbol),
                _ => None,
            };
        }
    };
    Some(symbol)
}
