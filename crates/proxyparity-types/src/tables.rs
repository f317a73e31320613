//! The two embedded reference tables.
//!
//! `SERVER_COMMANDS` mirrors the server's command table (name, arity, flags,
//! key finder, first/last/step key positions). `PROXY_COMMANDS` is the proxy's
//! declared support list. Both are maintained by hand; the harness checks
//! them against each other.

use crate::command::KeyExtractor::{NoPreload, NumKeys, Positional, Rename};
use crate::command::ServerCommand;
use crate::support::ProxyCommand;
use crate::support::ProxySupport::{No, Yes, YesStar};

/// Server command table.
#[rustfmt::skip]
pub const SERVER_COMMANDS: &[ServerCommand] = &[
    //                 name                arity  flags    keys      first last step
    ServerCommand::new("GET",                 2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("SET",                -3, "wm",    NoPreload,   1,  1, 1),
    ServerCommand::new("SETNX",               3, "wm",    NoPreload,   1,  1, 1),
    ServerCommand::new("SETEX",               4, "wm",    NoPreload,   1,  1, 1),
    ServerCommand::new("PSETEX",              4, "wm",    NoPreload,   1,  1, 1),
    ServerCommand::new("APPEND",              3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("STRLEN",              2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("DEL",                -2, "w",     NoPreload,   1, -1, 1),
    ServerCommand::new("EXISTS",              2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("SETBIT",              4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("GETBIT",              3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("SETRANGE",            4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("GETRANGE",            4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("SUBSTR",              4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("INCR",                2, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("DECR",                2, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("MGET",               -2, "r",     Positional,  1, -1, 1),
    ServerCommand::new("RPUSH",              -3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("LPUSH",              -3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("RPUSHX",              3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("LPUSHX",              3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("LINSERT",             5, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("RPOP",                2, "w",     Positional,  1,  1, 1),
    ServerCommand::new("LPOP",                2, "w",     Positional,  1,  1, 1),
    ServerCommand::new("BRPOP",              -3, "ws",    Positional,  1,  1, 1),
    ServerCommand::new("BRPOPLPUSH",          4, "wms",   Positional,  1,  2, 1),
    ServerCommand::new("BLPOP",              -3, "ws",    Positional,  1, -2, 1),
    ServerCommand::new("LLEN",                2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("LINDEX",              3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("LSET",                4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("LRANGE",              4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("LTRIM",               4, "w",     Positional,  1,  1, 1),
    ServerCommand::new("LREM",                4, "w",     Positional,  1,  1, 1),
    ServerCommand::new("RPOPLPUSH",           3, "wm",    Positional,  1,  2, 1),
    ServerCommand::new("SADD",               -3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("SREM",               -3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("SMOVE",               4, "w",     Positional,  1,  2, 1),
    ServerCommand::new("SISMEMBER",           3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("SCARD",               2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("SPOP",                2, "wRs",   Positional,  1,  1, 1),
    ServerCommand::new("SRANDMEMBER",        -2, "rR",    Positional,  1,  1, 1),
    ServerCommand::new("SINTER",             -2, "rS",    Positional,  1, -1, 1),
    ServerCommand::new("SINTERSTORE",        -3, "wm",    Positional,  1, -1, 1),
    ServerCommand::new("SUNION",             -2, "rS",    Positional,  1, -1, 1),
    ServerCommand::new("SUNIONSTORE",        -3, "wm",    Positional,  1, -1, 1),
    ServerCommand::new("SDIFF",              -2, "rS",    Positional,  1, -1, 1),
    ServerCommand::new("SDIFFSTORE",         -3, "wm",    Positional,  1, -1, 1),
    ServerCommand::new("SMEMBERS",            2, "rS",    Positional,  1,  1, 1),
    ServerCommand::new("SSCAN",              -3, "rR",    Positional,  1,  1, 1),
    ServerCommand::new("ZADD",               -4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("ZINCRBY",             4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("ZREM",               -3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("ZREMRANGEBYSCORE",    4, "w",     Positional,  1,  1, 1),
    ServerCommand::new("ZREMRANGEBYRANK",     4, "w",     Positional,  1,  1, 1),
    ServerCommand::new("ZUNIONSTORE",        -4, "wm",    NumKeys,     0,  0, 0),
    ServerCommand::new("ZINTERSTORE",        -4, "wm",    NumKeys,     0,  0, 0),
    ServerCommand::new("ZRANGE",             -4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZRANGEBYSCORE",      -4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZREVRANGEBYSCORE",   -4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZCOUNT",              4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZREVRANGE",          -4, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZCARD",               2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZSCORE",              3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZRANK",               3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZREVRANK",            3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("ZSCAN",              -3, "rR",    Positional,  1,  1, 1),
    ServerCommand::new("HSET",                4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("HSETNX",              4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("HGET",                3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("HMSET",              -4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("HMGET",              -3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("HINCRBY",             4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("HINCRBYFLOAT",        4, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("HDEL",               -3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("HLEN",                2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("HKEYS",               2, "rS",    Positional,  1,  1, 1),
    ServerCommand::new("HVALS",               2, "rS",    Positional,  1,  1, 1),
    ServerCommand::new("HGETALL",             2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("HEXISTS",             3, "r",     Positional,  1,  1, 1),
    ServerCommand::new("HSCAN",              -3, "rR",    Positional,  1,  1, 1),
    ServerCommand::new("INCRBY",              3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("DECRBY",              3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("INCRBYFLOAT",         3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("GETSET",              3, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("MSET",               -3, "wm",    Positional,  1, -1, 2),
    ServerCommand::new("MSETNX",             -3, "wm",    Positional,  1, -1, 2),
    ServerCommand::new("RANDOMKEY",           1, "rR",    Positional,  0,  0, 0),
    ServerCommand::new("SELECT",              2, "rl",    Positional,  0,  0, 0),
    ServerCommand::new("MOVE",                3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("RENAME",              3, "w",     Rename,      1,  2, 1),
    ServerCommand::new("RENAMENX",            3, "w",     Rename,      1,  2, 1),
    ServerCommand::new("EXPIRE",              3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("EXPIREAT",            3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("PEXPIRE",             3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("PEXPIREAT",           3, "w",     Positional,  1,  1, 1),
    ServerCommand::new("KEYS",                2, "rS",    Positional,  0,  0, 0),
    ServerCommand::new("SCAN",               -2, "rR",    Positional,  0,  0, 0),
    ServerCommand::new("DBSIZE",              1, "r",     Positional,  0,  0, 0),
    ServerCommand::new("AUTH",                2, "rslt",  Positional,  0,  0, 0),
    ServerCommand::new("PING",                1, "rt",    Positional,  0,  0, 0),
    ServerCommand::new("ECHO",                2, "r",     Positional,  0,  0, 0),
    ServerCommand::new("SAVE",                1, "ars",   Positional,  0,  0, 0),
    ServerCommand::new("BGSAVE",              1, "ar",    Positional,  0,  0, 0),
    ServerCommand::new("BGREWRITEAOF",        1, "ar",    Positional,  0,  0, 0),
    ServerCommand::new("SHUTDOWN",           -1, "arl",   Positional,  0,  0, 0),
    ServerCommand::new("LASTSAVE",            1, "rR",    Positional,  0,  0, 0),
    ServerCommand::new("TYPE",                2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("MULTI",               1, "rs",    Positional,  0,  0, 0),
    ServerCommand::new("EXEC",                1, "sM",    Positional,  0,  0, 0),
    ServerCommand::new("DISCARD",             1, "rs",    Positional,  0,  0, 0),
    ServerCommand::new("SYNC",                1, "ars",   Positional,  0,  0, 0),
    ServerCommand::new("PSYNC",               3, "ars",   Positional,  0,  0, 0),
    ServerCommand::new("REPLCONF",           -1, "arslt", Positional,  0,  0, 0),
    ServerCommand::new("FLUSHDB",             1, "w",     Positional,  0,  0, 0),
    ServerCommand::new("FLUSHALL",            1, "w",     Positional,  0,  0, 0),
    ServerCommand::new("SORT",               -2, "wm",    Positional,  1,  1, 1),
    ServerCommand::new("INFO",               -1, "rlt",   Positional,  0,  0, 0),
    ServerCommand::new("MONITOR",             1, "ars",   Positional,  0,  0, 0),
    ServerCommand::new("TTL",                 2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("PTTL",                2, "r",     Positional,  1,  1, 1),
    ServerCommand::new("PERSIST",             2, "w",     Positional,  1,  1, 1),
    ServerCommand::new("SLAVEOF",             3, "ast",   Positional,  0,  0, 0),
    ServerCommand::new("DEBUG",              -2, "as",    Positional,  0,  0, 0),
    ServerCommand::new("CONFIG",             -2, "ar",    Positional,  0,  0, 0),
    ServerCommand::new("SUBSCRIBE",          -2, "rpslt", Positional,  0,  0, 0),
    ServerCommand::new("UNSUBSCRIBE",        -1, "rpslt", Positional,  0,  0, 0),
    ServerCommand::new("PSUBSCRIBE",         -2, "rpslt", Positional,  0,  0, 0),
    ServerCommand::new("PUNSUBSCRIBE",       -1, "rpslt", Positional,  0,  0, 0),
    ServerCommand::new("PUBLISH",             3, "pltr",  Positional,  0,  0, 0),
    ServerCommand::new("PUBSUB",             -2, "pltrR", Positional,  0,  0, 0),
    ServerCommand::new("WATCH",              -2, "rs",    NoPreload,   1, -1, 1),
    ServerCommand::new("UNWATCH",             1, "rs",    Positional,  0,  0, 0),
    ServerCommand::new("RESTORE",             4, "awm",   Positional,  1,  1, 1),
    ServerCommand::new("MIGRATE",             6, "aw",    Positional,  0,  0, 0),
    ServerCommand::new("DUMP",                2, "ar",    Positional,  1,  1, 1),
    ServerCommand::new("OBJECT",             -2, "r",     Positional,  2,  2, 2),
    ServerCommand::new("CLIENT",             -2, "ar",    Positional,  0,  0, 0),
    ServerCommand::new("EVAL",               -3, "s",     NumKeys,     0,  0, 0),
    ServerCommand::new("EVALSHA",            -3, "s",     NumKeys,     0,  0, 0),
    ServerCommand::new("SLOWLOG",            -2, "r",     Positional,  0,  0, 0),
    ServerCommand::new("SCRIPT",             -2, "ras",   Positional,  0,  0, 0),
    ServerCommand::new("TIME",                1, "rR",    Positional,  0,  0, 0),
    ServerCommand::new("BITOP",              -4, "wm",    Positional,  2, -1, 1),
    ServerCommand::new("BITCOUNT",           -2, "r",     Positional,  1,  1, 1),
];

/// Proxy support table.
#[rustfmt::skip]
pub const PROXY_COMMANDS: &[ProxyCommand] = &[
    ProxyCommand::noted("SCRIPTEXISTS", No, "SCRIPT subcommand; the server table only has SCRIPT"),
    ProxyCommand::noted("SCRIPTFLUSH", No, "SCRIPT subcommand"),
    ProxyCommand::new("DEL", Yes),
    ProxyCommand::new("DUMP", Yes),
    ProxyCommand::new("EXISTS", Yes),
    ProxyCommand::new("EXPIRE", Yes),
    ProxyCommand::new("EXPIREAT", Yes),
    ProxyCommand::new("KEYS", No),
    ProxyCommand::new("MIGRATE", No),
    ProxyCommand::new("MOVE", No),
    ProxyCommand::new("OBJECT", No),
    ProxyCommand::new("PERSIST", Yes),
    ProxyCommand::new("PEXPIRE", Yes),
    ProxyCommand::new("PEXPIREAT", Yes),
    ProxyCommand::new("PTTL", Yes),
    ProxyCommand::new("RANDOMKEY", No),
    ProxyCommand::new("RENAME", No),
    ProxyCommand::new("RENAMENX", No),
    ProxyCommand::new("RESTORE", Yes),
    ProxyCommand::new("SORT", No),
    ProxyCommand::new("TTL", Yes),
    ProxyCommand::new("TYPE", Yes),
    ProxyCommand::new("APPEND", Yes),
    ProxyCommand::new("BITCOUNT", Yes),
    ProxyCommand::new("BITOP", No),
    ProxyCommand::new("DECR", Yes),
    ProxyCommand::new("DECRBY", Yes),
    ProxyCommand::new("GET", Yes),
    ProxyCommand::new("GETBIT", Yes),
    ProxyCommand::new("GETRANGE", Yes),
    ProxyCommand::new("GETSET", Yes),
    ProxyCommand::new("INCR", Yes),
    ProxyCommand::new("INCRBY", Yes),
    ProxyCommand::new("INCRBYFLOAT", Yes),
    ProxyCommand::new("MGET", Yes),
    ProxyCommand::new("MSET", No),
    ProxyCommand::new("MSETNX", No),
    ProxyCommand::new("PSETEX", Yes),
    ProxyCommand::new("SET", Yes),
    ProxyCommand::new("SETBIT", Yes),
    ProxyCommand::new("SETEX", Yes),
    ProxyCommand::new("SETNX", Yes),
    ProxyCommand::new("SETRANGE", Yes),
    ProxyCommand::new("STRLEN", Yes),
    ProxyCommand::new("HDEL", Yes),
    ProxyCommand::new("HEXISTS", Yes),
    ProxyCommand::new("HGET", Yes),
    ProxyCommand::new("HGETALL", Yes),
    ProxyCommand::new("HINCRBY", Yes),
    ProxyCommand::new("HINCRBYFLOAT", Yes),
    ProxyCommand::new("HKEYS", Yes),
    ProxyCommand::new("HLEN", Yes),
    ProxyCommand::new("HMGET", Yes),
    ProxyCommand::new("HMSET", Yes),
    ProxyCommand::new("HSET", Yes),
    ProxyCommand::new("HSETNX", Yes),
    ProxyCommand::new("HVALS", Yes),
    ProxyCommand::new("BLPOP", No),
    ProxyCommand::new("BRPOP", No),
    ProxyCommand::new("BRPOPLPUSH", No),
    ProxyCommand::new("LINDEX", Yes),
    ProxyCommand::new("LINSERT", Yes),
    ProxyCommand::new("LLEN", Yes),
    ProxyCommand::new("LPOP", Yes),
    ProxyCommand::new("LPUSH", Yes),
    ProxyCommand::new("LPUSHX", Yes),
    ProxyCommand::new("LRANGE", Yes),
    ProxyCommand::new("LREM", Yes),
    ProxyCommand::new("LSET", Yes),
    ProxyCommand::new("LTRIM", Yes),
    ProxyCommand::new("RPOP", Yes),
    ProxyCommand::noted("RPOPLPUSH", YesStar, "source and destination must hash to the same server"),
    ProxyCommand::new("RPUSH", Yes),
    ProxyCommand::new("RPUSHX", Yes),
    ProxyCommand::new("SADD", Yes),
    ProxyCommand::new("SCARD", Yes),
    ProxyCommand::noted("SDIFF", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::noted("SDIFFSTORE", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::noted("SINTER", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::noted("SINTERSTORE", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::new("SISMEMBER", Yes),
    ProxyCommand::new("SMEMBERS", Yes),
    ProxyCommand::noted("SMOVE", YesStar, "source and destination must hash to the same server"),
    ProxyCommand::new("SPOP", Yes),
    ProxyCommand::new("SRANDMEMBER", Yes),
    ProxyCommand::new("SREM", Yes),
    ProxyCommand::noted("SUNION", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::noted("SUNIONSTORE", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::new("ZADD", Yes),
    ProxyCommand::new("ZCARD", Yes),
    ProxyCommand::new("ZCOUNT", Yes),
    ProxyCommand::new("ZINCRBY", Yes),
    ProxyCommand::noted("ZINTERSTORE", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::new("ZRANGE", Yes),
    ProxyCommand::new("ZRANGEBYSCORE", Yes),
    ProxyCommand::new("ZRANK", Yes),
    ProxyCommand::new("ZREM", Yes),
    ProxyCommand::new("ZREMRANGEBYRANK", Yes),
    ProxyCommand::new("ZREMRANGEBYSCORE", Yes),
    ProxyCommand::new("ZREVRANGE", Yes),
    ProxyCommand::new("ZREVRANGEBYSCORE", Yes),
    ProxyCommand::new("ZREVRANK", Yes),
    ProxyCommand::new("ZSCORE", Yes),
    ProxyCommand::noted("ZUNIONSTORE", YesStar, "only when every key hashes to the same server"),
    ProxyCommand::new("PSUBSCRIBE", No),
    ProxyCommand::new("PUBLISH", No),
    ProxyCommand::new("PUNSUBSCRIBE", No),
    ProxyCommand::new("SUBSCRIBE", No),
    ProxyCommand::new("UNSUBSCRIBE", No),
    ProxyCommand::new("DISCARD", No),
    ProxyCommand::new("EXEC", No),
    ProxyCommand::new("MULTI", No),
    ProxyCommand::new("UNWATCH", No),
    ProxyCommand::new("WATCH", No),
    ProxyCommand::noted("EVAL", YesStar, "all keys must hash to the same server"),
    ProxyCommand::noted("EVALSHA", YesStar, "all keys must hash to the same server"),
    ProxyCommand::noted("SCRIPTKILL", No, "SCRIPT subcommand"),
    ProxyCommand::noted("SCRIPTLOAD", No, "SCRIPT subcommand"),
    ProxyCommand::new("AUTH", No),
    ProxyCommand::new("ECHO", No),
    ProxyCommand::new("PING", No),
    ProxyCommand::noted("QUIT", No, "handled by the proxy connection, never forwarded"),
    ProxyCommand::new("SELECT", No),
    ProxyCommand::new("BGREWRITEAOF", No),
    ProxyCommand::new("BGSAVE", No),
    ProxyCommand::noted("CLIENTKILL", No, "CLIENT subcommand"),
    ProxyCommand::noted("CLIENTLIST", No, "CLIENT subcommand"),
    ProxyCommand::noted("CONFIGGET", No, "CONFIG subcommand"),
    ProxyCommand::noted("CONFIGSET", No, "CONFIG subcommand"),
    ProxyCommand::noted("CONFIGRESETSTAT", No, "CONFIG subcommand"),
    ProxyCommand::new("DBSIZE", No),
    ProxyCommand::noted("DEBUGOBJECT", No, "DEBUG subcommand"),
    ProxyCommand::noted("DEBUGSEGFAULT", No, "DEBUG subcommand"),
    ProxyCommand::new("FLUSHALL", No),
    ProxyCommand::new("FLUSHDB", No),
    ProxyCommand::new("INFO", No),
    ProxyCommand::new("LASTSAVE", No),
    ProxyCommand::new("MONITOR", No),
    ProxyCommand::new("SAVE", No),
    ProxyCommand::new("SHUTDOWN", No),
    ProxyCommand::new("SLAVEOF", No),
    ProxyCommand::new("SLOWLOG", No),
    ProxyCommand::new("SYNC", No),
    ProxyCommand::new("TIME", No),
];

/// Reviewer annotations for commands the key-count survey lists.
pub const REVIEW_NOTES: &[(&str, &str)] = &[
    ("DEL", "multi-key write; the proxy splits it per key"),
    ("MGET", "multi-key read; the proxy splits it per key"),
    ("MSET", "key/value pairs; not split by the proxy"),
    ("MSETNX", "atomic across keys; cannot be split"),
    ("WATCH", "transactions are not supported"),
    ("BITOP", "BITOP op dest key [key ...]; not supported"),
    ("BLPOP", "blocking multi-key pop; not supported"),
    ("BRPOPLPUSH", "two-key blocking form; not supported"),
    ("RENAME", "two-key form; not supported"),
    ("RENAMENX", "two-key form; not supported"),
];

/// Case-insensitive lookup in a server table.
#[must_use]
pub fn find_server_command<'a>(
    table: &'a [ServerCommand],
    name: &str,
) -> Option<&'a ServerCommand> {
    table
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

/// Case-insensitive lookup in a proxy table.
#[must_use]
pub fn find_proxy_command<'a>(table: &'a [ProxyCommand], name: &str) -> Option<&'a ProxyCommand> {
    table
        .iter()
        .find(|command| command.name.eq_ignore_ascii_case(name))
}

/// Reviewer annotation for a surveyed command, if any.
#[must_use]
pub fn review_note(name: &str) -> Option<&'static str> {
    REVIEW_NOTES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, note)| *note)
}
