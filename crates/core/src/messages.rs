//! Localized message table
//!
//! Display text for every block and menu item, one [`LocalizedText`] per
//! entry. `[X]` and `[DIRECTION]` are argument placeholders the host
//! replaces with its input widgets.

use crate::locale::LocalizedText;

// -- Commands without arguments --

pub const TAKEOFF: LocalizedText = LocalizedText {
    en: "takeoff",
    ja: "離陸する",
    ja_hira: "りりくする",
    zh_cn: "起飞",
};

pub const LAND: LocalizedText = LocalizedText {
    en: "land",
    ja: "着陸する",
    ja_hira: "ちゃくりくする",
    zh_cn: "降落",
};

pub const EMERGENCY: LocalizedText = LocalizedText {
    en: "emergency",
    ja: "緊急停止",
    ja_hira: "きんきゅうていし",
    zh_cn: "紧急停机",
};

// -- Movement (distance in cm) --

pub const UP: LocalizedText = LocalizedText {
    en: "up [X] cm",
    ja: "上に [X]cm 上がる",
    ja_hira: "うえに [X] センチあがる",
    zh_cn: "向上 [X] 厘米",
};

pub const DOWN: LocalizedText = LocalizedText {
    en: "down [X] cm",
    ja: "下に [X]cm 下がる",
    ja_hira: "したに [X] センチさがる",
    zh_cn: "向下 [X] 厘米",
};

pub const LEFT: LocalizedText = LocalizedText {
    en: "move left [X] cm",
    ja: "左に [X]cm 動く",
    ja_hira: "ひだりに [X] センチうごく",
    zh_cn: "向左 [X] 厘米",
};

pub const RIGHT: LocalizedText = LocalizedText {
    en: "move right [X] cm",
    ja: "右に [X]cm 動く",
    ja_hira: "みぎに [X] センチうごく",
    zh_cn: "向右 [X] 厘米",
};

pub const FORWARD: LocalizedText = LocalizedText {
    en: "move forward [X] cm",
    ja: "前に [X]cm 進む",
    ja_hira: "まえに [X] センチすすむ",
    zh_cn: "前进 [X] 厘米",
};

pub const BACK: LocalizedText = LocalizedText {
    en: "move back [X] cm",
    ja: "後ろに [X]cm 下がる",
    ja_hira: "うしろに [X] センチさがる",
    zh_cn: "后退 [X] 厘米",
};

// -- Rotation (degrees) --

pub const CW: LocalizedText = LocalizedText {
    en: "rotate [X] degrees right",
    ja: "[X] 度右に回る",
    ja_hira: "[X] どみぎにまわる",
    zh_cn: "向右旋转 [X] 度",
};

pub const CCW: LocalizedText = LocalizedText {
    en: "rotate [X] degrees left",
    ja: "[X] 度左に回る",
    ja_hira: "[X] どひだりにまわる",
    zh_cn: "向左旋转 [X] 度",
};

// -- Flip and its direction menu --

pub const FLIP: LocalizedText = LocalizedText {
    en: "flip to [DIRECTION]",
    ja: "[DIRECTION] に宙返りする",
    ja_hira: "[DIRECTION] にちゅうがえりする",
    zh_cn: "向 [DIRECTION] 翻滚",
};

pub const FLIP_FRONT: LocalizedText = LocalizedText {
    en: "front",
    ja: "前",
    ja_hira: "まえ",
    zh_cn: "前",
};

pub const FLIP_BACK: LocalizedText = LocalizedText {
    en: "back",
    ja: "後ろ",
    ja_hira: "うしろ",
    zh_cn: "后",
};

pub const FLIP_LEFT: LocalizedText = LocalizedText {
    en: "left",
    ja: "左",
    ja_hira: "ひだり",
    zh_cn: "左",
};

pub const FLIP_RIGHT: LocalizedText = LocalizedText {
    en: "right",
    ja: "右",
    ja_hira: "みぎ",
    zh_cn: "右",
};

// -- Telemetry reporters --

pub const PITCH: LocalizedText = LocalizedText {
    en: "pitch",
    ja: "ピッチ",
    ja_hira: "ピッチ",
    zh_cn: "俯仰轴姿态角(°)",
};

pub const ROLL: LocalizedText = LocalizedText {
    en: "roll",
    ja: "ロール",
    ja_hira: "ロール",
    zh_cn: "横滚轴姿态角(°)",
};

pub const YAW: LocalizedText = LocalizedText {
    en: "yaw",
    ja: "ヨー",
    ja_hira: "ヨー",
    zh_cn: "平移轴姿态角(°)",
};

pub const VGX: LocalizedText = LocalizedText {
    en: "speed x",
    ja: "x方向の速度",
    ja_hira: "xほうこうのはやさ",
    zh_cn: "X轴速度(厘米/秒)",
};

pub const VGY: LocalizedText = LocalizedText {
    en: "speed y",
    ja: "y方向の速度",
    ja_hira: "yほうこうのはやさ",
    zh_cn: "Y轴速度(厘米/秒)",
};

pub const VGZ: LocalizedText = LocalizedText {
    en: "speed z",
    ja: "z方向の速度",
    ja_hira: "zほうこうのはやさ",
    zh_cn: "Z轴速度(厘米/秒)",
};

pub const TOF: LocalizedText = LocalizedText {
    en: "height from ground",
    ja: "地面からの高度",
    ja_hira: "じめんからのたかさ",
    zh_cn: "TOF高度(厘米)",
};

pub const HEIGHT: LocalizedText = LocalizedText {
    en: "height from takeoff point",
    ja: "離陸した場所からの高度",
    ja_hira: "りりくしたばしょからのたかさ",
    zh_cn: "相对高度(厘米)",
};

pub const BAT: LocalizedText = LocalizedText {
    en: "battery remaining",
    ja: "バッテリー残量",
    ja_hira: "バッテリーざんりょう",
    zh_cn: "电池电量(%)",
};

pub const BARO: LocalizedText = LocalizedText {
    en: "height by barometer",
    ja: "気圧計による高さ",
    ja_hira: "きあつけいによるたかさ",
    zh_cn: "气压计高度(厘米)",
};

pub const TIME: LocalizedText = LocalizedText {
    en: "flying time",
    ja: "飛行時間",
    ja_hira: "ひこうじかん",
    zh_cn: "飞行时间",
};

pub const AGX: LocalizedText = LocalizedText {
    en: "acceleration x",
    ja: "x方向の加速度",
    ja_hira: "xほうこうのかそくど",
    zh_cn: "X轴加速度(0.001g)",
};

pub const AGY: LocalizedText = LocalizedText {
    en: "acceleration y",
    ja: "y方向の加速度",
    ja_hira: "yほうこうのかそくど",
    zh_cn: "Y轴加速度(0.001g)",
};

pub const AGZ: LocalizedText = LocalizedText {
    en: "acceleration z",
    ja: "z方向の加速度",
    ja_hira: "zほうこうのかそくど",
    zh_cn: "Z轴加速度(0.001g)",
};
