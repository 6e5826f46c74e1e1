//! 내장 자판 매핑: 영문 QWERTY -> 러시아어 ЙЦУКЕН

use super::map::LayoutMap;
use crate::culture::Culture;

/// en-us -> ru-ru 매핑
///
/// 알파벳 키는 소문자만 등록합니다 (조회 시 대소문자를 무시하고, 출력 대소문자는
/// 입력 문자를 따름). 대소문자 개념이 없는 기호 키는 Shift 상태를 따로 등록합니다.
const EN_US_RU_RU: [(char, char); 40] = [
    // 알파벳 (26)
    ('a', 'ф'),
    ('b', 'и'),
    ('c', 'с'),
    ('d', 'в'),
    ('e', 'у'),
    ('f', 'а'),
    ('g', 'п'),
    ('h', 'р'),
    ('i', 'ш'),
    ('j', 'о'),
    ('k', 'л'),
    ('l', 'д'),
    ('m', 'ь'),
    ('n', 'т'),
    ('o', 'щ'),
    ('p', 'з'),
    ('q', 'й'),
    ('r', 'к'),
    ('s', 'ы'),
    ('t', 'е'),
    ('u', 'г'),
    ('v', 'м'),
    ('w', 'ц'),
    ('x', 'ч'),
    ('y', 'н'),
    ('z', 'я'),
    // 기호 키 (7)
    ('`', 'ё'),
    ('[', 'х'),
    (']', 'ъ'),
    (';', 'ж'),
    ('\'', 'э'),
    (',', 'б'),
    ('.', 'ю'),
    // Shift + 기호 키 (7)
    ('~', 'Ё'),
    ('{', 'Х'),
    ('}', 'Ъ'),
    (':', 'Ж'),
    ('"', 'Э'),
    ('<', 'Б'),
    ('>', 'Ю'),
];

/// 표준 QWERTY -> ЙЦУКЕН 매핑 생성
pub fn en_us_to_ru_ru() -> LayoutMap {
    LayoutMap::with_pairs(Culture::en_us(), EN_US_RU_RU)
}
