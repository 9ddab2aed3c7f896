// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 最大解码轮数
pub const MAX_DECODE_ROUNDS: usize = 6;

/// 反复进行百分号解码，直到结果不再变化或达到 [`MAX_DECODE_ROUNDS`] 轮
///
/// 用于展开多层嵌套的重定向编码。无法识别的转义序列原样保留，
/// 解码后产生的非法 UTF-8 字节以替换字符表示，不会返回错误。
pub fn decode(url: &str) -> String {
    let mut current = url.to_string();
    for _ in 0..MAX_DECODE_ROUNDS {
        let next = decode_once(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn decode_once(input: &str) -> String {
    let bytes = urlencoding::decode_binary(input.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}
