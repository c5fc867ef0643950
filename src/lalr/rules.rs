//! Grammar rule table: left-hand side, right-hand-side length, and
//! semantic action, transcribed rule-by-rule from the reference
//! parser's `elif m == N:` reduction-action chain (396 rules, indices
//! 1..=396; index 0 is the unused augmenting-rule placeholder).

/// What a reduction does with its popped children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RuleAction {
    /// Root rule: keep the first child as-is, discard the rest (the
    /// end-of-text sentinel).
    Toplevel,
    /// Wrap (or, with one real child, patch in place) under `category`.
    Node(i32),
    /// Zero real children: synthesize an elidable terminator of
    /// `category` unless elision is disabled.
    Elidable(i32),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    /// Goto-table nonterminal ordinal (`yyr1`), not a category code.
    pub lhs: i32,
    pub rhs_len: u8,
    pub action: RuleAction,
}

pub(crate) static RULES: [Rule; 397] = [
    Rule { lhs: 0, rhs_len: 0, action: RuleAction::Toplevel }, // index 0 unused
    Rule { lhs: 1, rhs_len: 2, action: RuleAction::Toplevel }, // rule 1
    Rule { lhs: 2, rhs_len: 1, action: RuleAction::Node(10000) }, // rule 2
    Rule { lhs: 2, rhs_len: 2, action: RuleAction::Node(10000) }, // rule 3
    Rule { lhs: 2, rhs_len: 2, action: RuleAction::Node(10000) }, // rule 4
    Rule { lhs: 2, rhs_len: 2, action: RuleAction::Node(10000) }, // rule 5
    Rule { lhs: 2, rhs_len: 3, action: RuleAction::Node(10000) }, // rule 6
    Rule { lhs: 2, rhs_len: 2, action: RuleAction::Node(10000) }, // rule 7
    Rule { lhs: 3, rhs_len: 2, action: RuleAction::Node(1) }, // rule 8
    Rule { lhs: 3, rhs_len: 1, action: RuleAction::Node(1) }, // rule 9
    Rule { lhs: 8, rhs_len: 2, action: RuleAction::Node(2) }, // rule 10
    Rule { lhs: 8, rhs_len: 2, action: RuleAction::Node(2) }, // rule 11
    Rule { lhs: 8, rhs_len: 2, action: RuleAction::Node(2) }, // rule 12
    Rule { lhs: 8, rhs_len: 1, action: RuleAction::Node(2) }, // rule 13
    Rule { lhs: 12, rhs_len: 1, action: RuleAction::Node(3) }, // rule 14
    Rule { lhs: 12, rhs_len: 0, action: RuleAction::Elidable(529) }, // rule 15
    Rule { lhs: 13, rhs_len: 1, action: RuleAction::Node(4) }, // rule 16
    Rule { lhs: 13, rhs_len: 3, action: RuleAction::Node(4) }, // rule 17
    Rule { lhs: 14, rhs_len: 1, action: RuleAction::Node(10) }, // rule 18
    Rule { lhs: 14, rhs_len: 3, action: RuleAction::Node(10) }, // rule 19
    Rule { lhs: 14, rhs_len: 2, action: RuleAction::Node(10) }, // rule 20
    Rule { lhs: 15, rhs_len: 1, action: RuleAction::Node(11) }, // rule 21
    Rule { lhs: 15, rhs_len: 3, action: RuleAction::Node(11) }, // rule 22
    Rule { lhs: 15, rhs_len: 2, action: RuleAction::Node(11) }, // rule 23
    Rule { lhs: 16, rhs_len: 1, action: RuleAction::Node(12) }, // rule 24
    Rule { lhs: 16, rhs_len: 3, action: RuleAction::Node(12) }, // rule 25
    Rule { lhs: 16, rhs_len: 4, action: RuleAction::Node(12) }, // rule 26
    Rule { lhs: 16, rhs_len: 4, action: RuleAction::Node(12) }, // rule 27
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 28
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 29
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 30
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 31
    Rule { lhs: 17, rhs_len: 2, action: RuleAction::Node(20) }, // rule 32
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 33
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 34
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 35
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 36
    Rule { lhs: 17, rhs_len: 1, action: RuleAction::Node(20) }, // rule 37
    Rule { lhs: 20, rhs_len: 2, action: RuleAction::Node(30) }, // rule 38
    Rule { lhs: 20, rhs_len: 3, action: RuleAction::Node(30) }, // rule 39
    Rule { lhs: 5, rhs_len: 1, action: RuleAction::Node(32) }, // rule 40
    Rule { lhs: 5, rhs_len: 2, action: RuleAction::Node(32) }, // rule 41
    Rule { lhs: 32, rhs_len: 1, action: RuleAction::Node(33) }, // rule 42
    Rule { lhs: 32, rhs_len: 1, action: RuleAction::Node(33) }, // rule 43
    Rule { lhs: 32, rhs_len: 1, action: RuleAction::Node(33) }, // rule 44
    Rule { lhs: 32, rhs_len: 1, action: RuleAction::Node(33) }, // rule 45
    Rule { lhs: 32, rhs_len: 1, action: RuleAction::Node(33) }, // rule 46
    Rule { lhs: 35, rhs_len: 3, action: RuleAction::Node(34) }, // rule 47
    Rule { lhs: 35, rhs_len: 3, action: RuleAction::Node(34) }, // rule 48
    Rule { lhs: 35, rhs_len: 4, action: RuleAction::Node(34) }, // rule 49
    Rule { lhs: 35, rhs_len: 5, action: RuleAction::Node(34) }, // rule 50
    Rule { lhs: 35, rhs_len: 4, action: RuleAction::Node(34) }, // rule 51
    Rule { lhs: 33, rhs_len: 3, action: RuleAction::Node(35) }, // rule 52
    Rule { lhs: 33, rhs_len: 4, action: RuleAction::Node(35) }, // rule 53
    Rule { lhs: 33, rhs_len: 4, action: RuleAction::Node(35) }, // rule 54
    Rule { lhs: 33, rhs_len: 3, action: RuleAction::Node(35) }, // rule 55
    Rule { lhs: 33, rhs_len: 4, action: RuleAction::Node(35) }, // rule 56
    Rule { lhs: 33, rhs_len: 3, action: RuleAction::Node(35) }, // rule 57
    Rule { lhs: 33, rhs_len: 2, action: RuleAction::Node(35) }, // rule 58
    Rule { lhs: 34, rhs_len: 3, action: RuleAction::Node(36) }, // rule 59
    Rule { lhs: 31, rhs_len: 1, action: RuleAction::Node(40) }, // rule 60
    Rule { lhs: 31, rhs_len: 1, action: RuleAction::Node(40) }, // rule 61
    Rule { lhs: 48, rhs_len: 4, action: RuleAction::Node(41) }, // rule 62
    Rule { lhs: 48, rhs_len: 2, action: RuleAction::Node(41) }, // rule 63
    Rule { lhs: 48, rhs_len: 1, action: RuleAction::Node(41) }, // rule 64
    Rule { lhs: 51, rhs_len: 3, action: RuleAction::Node(42) }, // rule 65
    Rule { lhs: 51, rhs_len: 2, action: RuleAction::Node(42) }, // rule 66
    Rule { lhs: 47, rhs_len: 1, action: RuleAction::Node(50) }, // rule 67
    Rule { lhs: 47, rhs_len: 5, action: RuleAction::Node(50) }, // rule 68
    Rule { lhs: 52, rhs_len: 1, action: RuleAction::Node(51) }, // rule 69
    Rule { lhs: 52, rhs_len: 4, action: RuleAction::Node(51) }, // rule 70
    Rule { lhs: 56, rhs_len: 1, action: RuleAction::Node(52) }, // rule 71
    Rule { lhs: 56, rhs_len: 4, action: RuleAction::Node(52) }, // rule 72
    Rule { lhs: 57, rhs_len: 1, action: RuleAction::Node(53) }, // rule 73
    Rule { lhs: 57, rhs_len: 2, action: RuleAction::Node(53) }, // rule 74
    Rule { lhs: 59, rhs_len: 4, action: RuleAction::Node(54) }, // rule 75
    Rule { lhs: 59, rhs_len: 4, action: RuleAction::Node(54) }, // rule 76
    Rule { lhs: 59, rhs_len: 2, action: RuleAction::Node(54) }, // rule 77
    Rule { lhs: 55, rhs_len: 2, action: RuleAction::Node(71) }, // rule 78
    Rule { lhs: 55, rhs_len: 1, action: RuleAction::Node(71) }, // rule 79
    Rule { lhs: 26, rhs_len: 1, action: RuleAction::Node(80) }, // rule 80
    Rule { lhs: 26, rhs_len: 2, action: RuleAction::Node(80) }, // rule 81
    Rule { lhs: 60, rhs_len: 1, action: RuleAction::Node(81) }, // rule 82
    Rule { lhs: 60, rhs_len: 1, action: RuleAction::Node(81) }, // rule 83
    Rule { lhs: 60, rhs_len: 1, action: RuleAction::Node(81) }, // rule 84
    Rule { lhs: 60, rhs_len: 1, action: RuleAction::Node(81) }, // rule 85
    Rule { lhs: 61, rhs_len: 2, action: RuleAction::Node(82) }, // rule 86
    Rule { lhs: 61, rhs_len: 2, action: RuleAction::Node(82) }, // rule 87
    Rule { lhs: 62, rhs_len: 7, action: RuleAction::Node(83) }, // rule 88
    Rule { lhs: 62, rhs_len: 6, action: RuleAction::Node(83) }, // rule 89
    Rule { lhs: 41, rhs_len: 1, action: RuleAction::Node(90) }, // rule 90
    Rule { lhs: 41, rhs_len: 4, action: RuleAction::Node(90) }, // rule 91
    Rule { lhs: 41, rhs_len: 4, action: RuleAction::Node(90) }, // rule 92
    Rule { lhs: 68, rhs_len: 1, action: RuleAction::Node(91) }, // rule 93
    Rule { lhs: 68, rhs_len: 3, action: RuleAction::Node(91) }, // rule 94
    Rule { lhs: 71, rhs_len: 1, action: RuleAction::Node(92) }, // rule 95
    Rule { lhs: 71, rhs_len: 3, action: RuleAction::Node(92) }, // rule 96
    Rule { lhs: 71, rhs_len: 3, action: RuleAction::Node(92) }, // rule 97
    Rule { lhs: 72, rhs_len: 1, action: RuleAction::Node(93) }, // rule 98
    Rule { lhs: 72, rhs_len: 4, action: RuleAction::Node(93) }, // rule 99
    Rule { lhs: 75, rhs_len: 1, action: RuleAction::Node(94) }, // rule 100
    Rule { lhs: 75, rhs_len: 2, action: RuleAction::Node(94) }, // rule 101
    Rule { lhs: 75, rhs_len: 3, action: RuleAction::Node(94) }, // rule 102
    Rule { lhs: 75, rhs_len: 4, action: RuleAction::Node(94) }, // rule 103
    Rule { lhs: 76, rhs_len: 1, action: RuleAction::Node(95) }, // rule 104
    Rule { lhs: 76, rhs_len: 2, action: RuleAction::Node(95) }, // rule 105
    Rule { lhs: 77, rhs_len: 3, action: RuleAction::Node(96) }, // rule 106
    Rule { lhs: 77, rhs_len: 4, action: RuleAction::Node(96) }, // rule 107
    Rule { lhs: 77, rhs_len: 1, action: RuleAction::Node(96) }, // rule 108
    Rule { lhs: 77, rhs_len: 2, action: RuleAction::Node(96) }, // rule 109
    Rule { lhs: 77, rhs_len: 3, action: RuleAction::Node(96) }, // rule 110
    Rule { lhs: 77, rhs_len: 1, action: RuleAction::Node(96) }, // rule 111
    Rule { lhs: 77, rhs_len: 1, action: RuleAction::Node(96) }, // rule 112
    Rule { lhs: 83, rhs_len: 3, action: RuleAction::Node(110) }, // rule 113
    Rule { lhs: 83, rhs_len: 3, action: RuleAction::Node(110) }, // rule 114
    Rule { lhs: 85, rhs_len: 1, action: RuleAction::Node(111) }, // rule 115
    Rule { lhs: 85, rhs_len: 2, action: RuleAction::Node(111) }, // rule 116
    Rule { lhs: 85, rhs_len: 2, action: RuleAction::Node(111) }, // rule 117
    Rule { lhs: 85, rhs_len: 3, action: RuleAction::Node(111) }, // rule 118
    Rule { lhs: 45, rhs_len: 1, action: RuleAction::Node(112) }, // rule 119
    Rule { lhs: 45, rhs_len: 2, action: RuleAction::Node(112) }, // rule 120
    Rule { lhs: 45, rhs_len: 2, action: RuleAction::Node(112) }, // rule 121
    Rule { lhs: 45, rhs_len: 3, action: RuleAction::Node(112) }, // rule 122
    Rule { lhs: 45, rhs_len: 2, action: RuleAction::Node(112) }, // rule 123
    Rule { lhs: 28, rhs_len: 1, action: RuleAction::Node(121) }, // rule 124
    Rule { lhs: 28, rhs_len: 3, action: RuleAction::Node(121) }, // rule 125
    Rule { lhs: 86, rhs_len: 3, action: RuleAction::Node(122) }, // rule 126
    Rule { lhs: 86, rhs_len: 3, action: RuleAction::Node(122) }, // rule 127
    Rule { lhs: 39, rhs_len: 2, action: RuleAction::Node(130) }, // rule 128
    Rule { lhs: 39, rhs_len: 1, action: RuleAction::Node(130) }, // rule 129
    Rule { lhs: 89, rhs_len: 1, action: RuleAction::Node(131) }, // rule 130
    Rule { lhs: 89, rhs_len: 2, action: RuleAction::Node(131) }, // rule 131
    Rule { lhs: 90, rhs_len: 1, action: RuleAction::Node(132) }, // rule 132
    Rule { lhs: 90, rhs_len: 3, action: RuleAction::Node(132) }, // rule 133
    Rule { lhs: 91, rhs_len: 1, action: RuleAction::Node(133) }, // rule 134
    Rule { lhs: 91, rhs_len: 2, action: RuleAction::Node(133) }, // rule 135
    Rule { lhs: 93, rhs_len: 1, action: RuleAction::Node(134) }, // rule 136
    Rule { lhs: 93, rhs_len: 3, action: RuleAction::Node(134) }, // rule 137
    Rule { lhs: 93, rhs_len: 4, action: RuleAction::Node(134) }, // rule 138
    Rule { lhs: 94, rhs_len: 1, action: RuleAction::Node(135) }, // rule 139
    Rule { lhs: 94, rhs_len: 3, action: RuleAction::Node(135) }, // rule 140
    Rule { lhs: 94, rhs_len: 3, action: RuleAction::Node(135) }, // rule 141
    Rule { lhs: 95, rhs_len: 1, action: RuleAction::Node(136) }, // rule 142
    Rule { lhs: 95, rhs_len: 3, action: RuleAction::Node(136) }, // rule 143
    Rule { lhs: 95, rhs_len: 1, action: RuleAction::Node(136) }, // rule 144
    Rule { lhs: 95, rhs_len: 2, action: RuleAction::Node(136) }, // rule 145
    Rule { lhs: 98, rhs_len: 4, action: RuleAction::Node(137) }, // rule 146
    Rule { lhs: 97, rhs_len: 1, action: RuleAction::Node(150) }, // rule 147
    Rule { lhs: 97, rhs_len: 3, action: RuleAction::Node(150) }, // rule 148
    Rule { lhs: 101, rhs_len: 1, action: RuleAction::Node(151) }, // rule 149
    Rule { lhs: 101, rhs_len: 2, action: RuleAction::Node(151) }, // rule 150
    Rule { lhs: 103, rhs_len: 1, action: RuleAction::Node(152) }, // rule 151
    Rule { lhs: 103, rhs_len: 3, action: RuleAction::Node(152) }, // rule 152
    Rule { lhs: 103, rhs_len: 2, action: RuleAction::Node(152) }, // rule 153
    Rule { lhs: 103, rhs_len: 3, action: RuleAction::Node(152) }, // rule 154
    Rule { lhs: 103, rhs_len: 2, action: RuleAction::Node(152) }, // rule 155
    Rule { lhs: 103, rhs_len: 3, action: RuleAction::Node(152) }, // rule 156
    Rule { lhs: 103, rhs_len: 4, action: RuleAction::Node(152) }, // rule 157
    Rule { lhs: 103, rhs_len: 2, action: RuleAction::Node(152) }, // rule 158
    Rule { lhs: 103, rhs_len: 2, action: RuleAction::Node(152) }, // rule 159
    Rule { lhs: 103, rhs_len: 3, action: RuleAction::Node(152) }, // rule 160
    Rule { lhs: 30, rhs_len: 3, action: RuleAction::Node(160) }, // rule 161
    Rule { lhs: 30, rhs_len: 4, action: RuleAction::Node(160) }, // rule 162
    Rule { lhs: 29, rhs_len: 2, action: RuleAction::Node(161) }, // rule 163
    Rule { lhs: 29, rhs_len: 3, action: RuleAction::Node(161) }, // rule 164
    Rule { lhs: 25, rhs_len: 2, action: RuleAction::Node(300) }, // rule 165
    Rule { lhs: 25, rhs_len: 3, action: RuleAction::Node(300) }, // rule 166
    Rule { lhs: 81, rhs_len: 1, action: RuleAction::Node(310) }, // rule 167
    Rule { lhs: 81, rhs_len: 3, action: RuleAction::Node(310) }, // rule 168
    Rule { lhs: 81, rhs_len: 2, action: RuleAction::Node(310) }, // rule 169
    Rule { lhs: 115, rhs_len: 1, action: RuleAction::Node(311) }, // rule 170
    Rule { lhs: 115, rhs_len: 4, action: RuleAction::Node(311) }, // rule 171
    Rule { lhs: 118, rhs_len: 1, action: RuleAction::Node(312) }, // rule 172
    Rule { lhs: 118, rhs_len: 3, action: RuleAction::Node(312) }, // rule 173
    Rule { lhs: 118, rhs_len: 4, action: RuleAction::Node(312) }, // rule 174
    Rule { lhs: 120, rhs_len: 1, action: RuleAction::Node(313) }, // rule 175
    Rule { lhs: 120, rhs_len: 2, action: RuleAction::Node(313) }, // rule 176
    Rule { lhs: 117, rhs_len: 3, action: RuleAction::Node(330) }, // rule 177
    Rule { lhs: 122, rhs_len: 1, action: RuleAction::Node(332) }, // rule 178
    Rule { lhs: 122, rhs_len: 1, action: RuleAction::Node(332) }, // rule 179
    Rule { lhs: 116, rhs_len: 1, action: RuleAction::Node(370) }, // rule 180
    Rule { lhs: 116, rhs_len: 3, action: RuleAction::Node(370) }, // rule 181
    Rule { lhs: 116, rhs_len: 4, action: RuleAction::Node(370) }, // rule 182
    Rule { lhs: 123, rhs_len: 1, action: RuleAction::Node(371) }, // rule 183
    Rule { lhs: 123, rhs_len: 4, action: RuleAction::Node(371) }, // rule 184
    Rule { lhs: 124, rhs_len: 1, action: RuleAction::Node(372) }, // rule 185
    Rule { lhs: 124, rhs_len: 3, action: RuleAction::Node(372) }, // rule 186
    Rule { lhs: 107, rhs_len: 1, action: RuleAction::Node(374) }, // rule 187
    Rule { lhs: 107, rhs_len: 2, action: RuleAction::Node(374) }, // rule 188
    Rule { lhs: 107, rhs_len: 2, action: RuleAction::Node(374) }, // rule 189
    Rule { lhs: 107, rhs_len: 2, action: RuleAction::Node(374) }, // rule 190
    Rule { lhs: 107, rhs_len: 3, action: RuleAction::Node(374) }, // rule 191
    Rule { lhs: 107, rhs_len: 3, action: RuleAction::Node(374) }, // rule 192
    Rule { lhs: 119, rhs_len: 1, action: RuleAction::Node(381) }, // rule 193
    Rule { lhs: 119, rhs_len: 4, action: RuleAction::Node(381) }, // rule 194
    Rule { lhs: 119, rhs_len: 4, action: RuleAction::Node(381) }, // rule 195
    Rule { lhs: 126, rhs_len: 1, action: RuleAction::Node(382) }, // rule 196
    Rule { lhs: 126, rhs_len: 3, action: RuleAction::Node(382) }, // rule 197
    Rule { lhs: 127, rhs_len: 1, action: RuleAction::Node(383) }, // rule 198
    Rule { lhs: 127, rhs_len: 3, action: RuleAction::Node(383) }, // rule 199
    Rule { lhs: 127, rhs_len: 3, action: RuleAction::Node(383) }, // rule 200
    Rule { lhs: 128, rhs_len: 1, action: RuleAction::Node(385) }, // rule 201
    Rule { lhs: 128, rhs_len: 2, action: RuleAction::Node(385) }, // rule 202
    Rule { lhs: 128, rhs_len: 3, action: RuleAction::Node(385) }, // rule 203
    Rule { lhs: 128, rhs_len: 3, action: RuleAction::Node(385) }, // rule 204
    Rule { lhs: 128, rhs_len: 3, action: RuleAction::Node(385) }, // rule 205
    Rule { lhs: 128, rhs_len: 4, action: RuleAction::Node(385) }, // rule 206
    Rule { lhs: 128, rhs_len: 3, action: RuleAction::Node(385) }, // rule 207
    Rule { lhs: 80, rhs_len: 1, action: RuleAction::Node(400) }, // rule 208
    Rule { lhs: 80, rhs_len: 2, action: RuleAction::Node(400) }, // rule 209
    Rule { lhs: 80, rhs_len: 2, action: RuleAction::Node(400) }, // rule 210
    Rule { lhs: 6, rhs_len: 1, action: RuleAction::Node(404) }, // rule 211
    Rule { lhs: 6, rhs_len: 2, action: RuleAction::Node(404) }, // rule 212
    Rule { lhs: 130, rhs_len: 1, action: RuleAction::Node(405) }, // rule 213
    Rule { lhs: 130, rhs_len: 2, action: RuleAction::Node(405) }, // rule 214
    Rule { lhs: 104, rhs_len: 1, action: RuleAction::Node(407) }, // rule 215
    Rule { lhs: 104, rhs_len: 2, action: RuleAction::Node(407) }, // rule 216
    Rule { lhs: 131, rhs_len: 1, action: RuleAction::Node(408) }, // rule 217
    Rule { lhs: 131, rhs_len: 1, action: RuleAction::Node(408) }, // rule 218
    Rule { lhs: 131, rhs_len: 1, action: RuleAction::Node(408) }, // rule 219
    Rule { lhs: 131, rhs_len: 2, action: RuleAction::Node(408) }, // rule 220
    Rule { lhs: 11, rhs_len: 1, action: RuleAction::Node(410) }, // rule 221
    Rule { lhs: 11, rhs_len: 2, action: RuleAction::Node(410) }, // rule 222
    Rule { lhs: 11, rhs_len: 2, action: RuleAction::Node(410) }, // rule 223
    Rule { lhs: 4, rhs_len: 1, action: RuleAction::Node(411) }, // rule 224
    Rule { lhs: 4, rhs_len: 2, action: RuleAction::Node(411) }, // rule 225
    Rule { lhs: 133, rhs_len: 1, action: RuleAction::Node(412) }, // rule 226
    Rule { lhs: 133, rhs_len: 2, action: RuleAction::Node(412) }, // rule 227
    Rule { lhs: 134, rhs_len: 1, action: RuleAction::Node(413) }, // rule 228
    Rule { lhs: 134, rhs_len: 1, action: RuleAction::Node(413) }, // rule 229
    Rule { lhs: 134, rhs_len: 2, action: RuleAction::Node(413) }, // rule 230
    Rule { lhs: 134, rhs_len: 2, action: RuleAction::Node(413) }, // rule 231
    Rule { lhs: 134, rhs_len: 1, action: RuleAction::Node(413) }, // rule 232
    Rule { lhs: 134, rhs_len: 1, action: RuleAction::Node(413) }, // rule 233
    Rule { lhs: 134, rhs_len: 1, action: RuleAction::Node(413) }, // rule 234
    Rule { lhs: 43, rhs_len: 1, action: RuleAction::Node(415) }, // rule 235
    Rule { lhs: 43, rhs_len: 1, action: RuleAction::Node(415) }, // rule 236
    Rule { lhs: 43, rhs_len: 2, action: RuleAction::Node(415) }, // rule 237
    Rule { lhs: 135, rhs_len: 1, action: RuleAction::Node(416) }, // rule 238
    Rule { lhs: 135, rhs_len: 2, action: RuleAction::Node(416) }, // rule 239
    Rule { lhs: 136, rhs_len: 1, action: RuleAction::Node(417) }, // rule 240
    Rule { lhs: 136, rhs_len: 2, action: RuleAction::Node(417) }, // rule 241
    Rule { lhs: 67, rhs_len: 1, action: RuleAction::Node(421) }, // rule 242
    Rule { lhs: 67, rhs_len: 1, action: RuleAction::Node(421) }, // rule 243
    Rule { lhs: 67, rhs_len: 2, action: RuleAction::Node(421) }, // rule 244
    Rule { lhs: 7, rhs_len: 1, action: RuleAction::Node(422) }, // rule 245
    Rule { lhs: 7, rhs_len: 2, action: RuleAction::Node(422) }, // rule 246
    Rule { lhs: 7, rhs_len: 1, action: RuleAction::Node(422) }, // rule 247
    Rule { lhs: 7, rhs_len: 2, action: RuleAction::Node(422) }, // rule 248
    Rule { lhs: 108, rhs_len: 1, action: RuleAction::Node(425) }, // rule 249
    Rule { lhs: 108, rhs_len: 3, action: RuleAction::Node(425) }, // rule 250
    Rule { lhs: 139, rhs_len: 1, action: RuleAction::Node(426) }, // rule 251
    Rule { lhs: 139, rhs_len: 2, action: RuleAction::Node(426) }, // rule 252
    Rule { lhs: 139, rhs_len: 2, action: RuleAction::Node(426) }, // rule 253
    Rule { lhs: 139, rhs_len: 3, action: RuleAction::Node(426) }, // rule 254
    Rule { lhs: 84, rhs_len: 1, action: RuleAction::Node(432) }, // rule 255
    Rule { lhs: 84, rhs_len: 2, action: RuleAction::Node(432) }, // rule 256
    Rule { lhs: 140, rhs_len: 1, action: RuleAction::Node(433) }, // rule 257
    Rule { lhs: 140, rhs_len: 1, action: RuleAction::Node(433) }, // rule 258
    Rule { lhs: 140, rhs_len: 1, action: RuleAction::Node(433) }, // rule 259
    Rule { lhs: 140, rhs_len: 3, action: RuleAction::Node(433) }, // rule 260
    Rule { lhs: 141, rhs_len: 4, action: RuleAction::Node(434) }, // rule 261
    Rule { lhs: 142, rhs_len: 2, action: RuleAction::Node(435) }, // rule 262
    Rule { lhs: 143, rhs_len: 3, action: RuleAction::Node(436) }, // rule 263
    Rule { lhs: 38, rhs_len: 1, action: RuleAction::Node(440) }, // rule 264
    Rule { lhs: 38, rhs_len: 2, action: RuleAction::Node(440) }, // rule 265
    Rule { lhs: 92, rhs_len: 1, action: RuleAction::Node(443) }, // rule 266
    Rule { lhs: 92, rhs_len: 2, action: RuleAction::Node(443) }, // rule 267
    Rule { lhs: 102, rhs_len: 1, action: RuleAction::Node(444) }, // rule 268
    Rule { lhs: 102, rhs_len: 2, action: RuleAction::Node(444) }, // rule 269
    Rule { lhs: 23, rhs_len: 1, action: RuleAction::Node(445) }, // rule 270
    Rule { lhs: 23, rhs_len: 2, action: RuleAction::Node(445) }, // rule 271
    Rule { lhs: 18, rhs_len: 1, action: RuleAction::Node(447) }, // rule 272
    Rule { lhs: 18, rhs_len: 2, action: RuleAction::Node(447) }, // rule 273
    Rule { lhs: 144, rhs_len: 1, action: RuleAction::Node(448) }, // rule 274
    Rule { lhs: 144, rhs_len: 1, action: RuleAction::Elidable(567) }, // rule 275
    Rule { lhs: 65, rhs_len: 1, action: RuleAction::Node(450) }, // rule 276
    Rule { lhs: 65, rhs_len: 2, action: RuleAction::Node(450) }, // rule 277
    Rule { lhs: 65, rhs_len: 1, action: RuleAction::Elidable(556) }, // rule 278
    Rule { lhs: 42, rhs_len: 1, action: RuleAction::Node(451) }, // rule 279
    Rule { lhs: 42, rhs_len: 2, action: RuleAction::Node(451) }, // rule 280
    Rule { lhs: 121, rhs_len: 1, action: RuleAction::Node(452) }, // rule 281
    Rule { lhs: 121, rhs_len: 2, action: RuleAction::Node(452) }, // rule 282
    Rule { lhs: 121, rhs_len: 1, action: RuleAction::Elidable(658) }, // rule 283
    Rule { lhs: 109, rhs_len: 1, action: RuleAction::Node(453) }, // rule 284
    Rule { lhs: 109, rhs_len: 2, action: RuleAction::Node(453) }, // rule 285
    Rule { lhs: 109, rhs_len: 1, action: RuleAction::Elidable(552) }, // rule 286
    Rule { lhs: 19, rhs_len: 1, action: RuleAction::Node(454) }, // rule 287
    Rule { lhs: 19, rhs_len: 2, action: RuleAction::Node(454) }, // rule 288
    Rule { lhs: 19, rhs_len: 1, action: RuleAction::Elidable(611) }, // rule 289
    Rule { lhs: 27, rhs_len: 1, action: RuleAction::Node(456) }, // rule 290
    Rule { lhs: 27, rhs_len: 2, action: RuleAction::Node(456) }, // rule 291
    Rule { lhs: 27, rhs_len: 1, action: RuleAction::Elidable(614) }, // rule 292
    Rule { lhs: 44, rhs_len: 1, action: RuleAction::Node(457) }, // rule 293
    Rule { lhs: 44, rhs_len: 1, action: RuleAction::Elidable(526) }, // rule 294
    Rule { lhs: 145, rhs_len: 1, action: RuleAction::Node(458) }, // rule 295
    Rule { lhs: 145, rhs_len: 2, action: RuleAction::Node(458) }, // rule 296
    Rule { lhs: 145, rhs_len: 1, action: RuleAction::Elidable(531) }, // rule 297
    Rule { lhs: 40, rhs_len: 1, action: RuleAction::Node(459) }, // rule 298
    Rule { lhs: 40, rhs_len: 1, action: RuleAction::Elidable(598) }, // rule 299
    Rule { lhs: 66, rhs_len: 1, action: RuleAction::Node(460) }, // rule 300
    Rule { lhs: 66, rhs_len: 2, action: RuleAction::Node(460) }, // rule 301
    Rule { lhs: 66, rhs_len: 1, action: RuleAction::Elidable(588) }, // rule 302
    Rule { lhs: 112, rhs_len: 1, action: RuleAction::Node(461) }, // rule 303
    Rule { lhs: 112, rhs_len: 2, action: RuleAction::Node(461) }, // rule 304
    Rule { lhs: 112, rhs_len: 1, action: RuleAction::Elidable(651) }, // rule 305
    Rule { lhs: 146, rhs_len: 1, action: RuleAction::Node(462) }, // rule 306
    Rule { lhs: 146, rhs_len: 1, action: RuleAction::Elidable(651) }, // rule 307
    Rule { lhs: 79, rhs_len: 1, action: RuleAction::Node(463) }, // rule 308
    Rule { lhs: 79, rhs_len: 2, action: RuleAction::Node(463) }, // rule 309
    Rule { lhs: 79, rhs_len: 1, action: RuleAction::Elidable(573) }, // rule 310
    Rule { lhs: 87, rhs_len: 1, action: RuleAction::Node(464) }, // rule 311
    Rule { lhs: 87, rhs_len: 2, action: RuleAction::Node(464) }, // rule 312
    Rule { lhs: 87, rhs_len: 1, action: RuleAction::Elidable(538) }, // rule 313
    Rule { lhs: 106, rhs_len: 1, action: RuleAction::Node(465) }, // rule 314
    Rule { lhs: 106, rhs_len: 2, action: RuleAction::Node(465) }, // rule 315
    Rule { lhs: 106, rhs_len: 1, action: RuleAction::Elidable(575) }, // rule 316
    Rule { lhs: 54, rhs_len: 1, action: RuleAction::Node(466) }, // rule 317
    Rule { lhs: 54, rhs_len: 2, action: RuleAction::Node(466) }, // rule 318
    Rule { lhs: 54, rhs_len: 1, action: RuleAction::Elidable(550) }, // rule 319
    Rule { lhs: 110, rhs_len: 1, action: RuleAction::Node(467) }, // rule 320
    Rule { lhs: 110, rhs_len: 2, action: RuleAction::Node(467) }, // rule 321
    Rule { lhs: 110, rhs_len: 1, action: RuleAction::Elidable(506) }, // rule 322
    Rule { lhs: 46, rhs_len: 1, action: RuleAction::Node(468) }, // rule 323
    Rule { lhs: 46, rhs_len: 1, action: RuleAction::Elidable(607) }, // rule 324
    Rule { lhs: 88, rhs_len: 1, action: RuleAction::Node(469) }, // rule 325
    Rule { lhs: 88, rhs_len: 2, action: RuleAction::Node(469) }, // rule 326
    Rule { lhs: 88, rhs_len: 1, action: RuleAction::Elidable(557) }, // rule 327
    Rule { lhs: 113, rhs_len: 1, action: RuleAction::Node(470) }, // rule 328
    Rule { lhs: 114, rhs_len: 1, action: RuleAction::Node(471) }, // rule 329
    Rule { lhs: 114, rhs_len: 2, action: RuleAction::Node(471) }, // rule 330
    Rule { lhs: 114, rhs_len: 1, action: RuleAction::Elidable(678) }, // rule 331
    Rule { lhs: 82, rhs_len: 1, action: RuleAction::Node(472) }, // rule 332
    Rule { lhs: 82, rhs_len: 2, action: RuleAction::Node(472) }, // rule 333
    Rule { lhs: 82, rhs_len: 1, action: RuleAction::Elidable(568) }, // rule 334
    Rule { lhs: 125, rhs_len: 1, action: RuleAction::Node(473) }, // rule 335
    Rule { lhs: 125, rhs_len: 2, action: RuleAction::Node(473) }, // rule 336
    Rule { lhs: 125, rhs_len: 1, action: RuleAction::Elidable(675) }, // rule 337
    Rule { lhs: 147, rhs_len: 1, action: RuleAction::Node(474) }, // rule 338
    Rule { lhs: 147, rhs_len: 1, action: RuleAction::Elidable(678) }, // rule 339
    Rule { lhs: 105, rhs_len: 1, action: RuleAction::Node(480) }, // rule 340
    Rule { lhs: 105, rhs_len: 2, action: RuleAction::Node(480) }, // rule 341
    Rule { lhs: 148, rhs_len: 1, action: RuleAction::Node(481) }, // rule 342
    Rule { lhs: 148, rhs_len: 2, action: RuleAction::Node(481) }, // rule 343
    Rule { lhs: 99, rhs_len: 1, action: RuleAction::Node(482) }, // rule 344
    Rule { lhs: 99, rhs_len: 2, action: RuleAction::Node(482) }, // rule 345
    Rule { lhs: 78, rhs_len: 1, action: RuleAction::Node(483) }, // rule 346
    Rule { lhs: 78, rhs_len: 2, action: RuleAction::Node(483) }, // rule 347
    Rule { lhs: 78, rhs_len: 1, action: RuleAction::Node(483) }, // rule 348
    Rule { lhs: 36, rhs_len: 3, action: RuleAction::Node(486) }, // rule 349
    Rule { lhs: 36, rhs_len: 4, action: RuleAction::Node(486) }, // rule 350
    Rule { lhs: 36, rhs_len: 3, action: RuleAction::Node(486) }, // rule 351
    Rule { lhs: 64, rhs_len: 1, action: RuleAction::Node(490) }, // rule 352
    Rule { lhs: 64, rhs_len: 1, action: RuleAction::Node(490) }, // rule 353
    Rule { lhs: 21, rhs_len: 1, action: RuleAction::Node(491) }, // rule 354
    Rule { lhs: 21, rhs_len: 3, action: RuleAction::Node(491) }, // rule 355
    Rule { lhs: 37, rhs_len: 1, action: RuleAction::Node(801) }, // rule 356
    Rule { lhs: 22, rhs_len: 1, action: RuleAction::Node(802) }, // rule 357
    Rule { lhs: 22, rhs_len: 2, action: RuleAction::Node(802) }, // rule 358
    Rule { lhs: 73, rhs_len: 1, action: RuleAction::Node(803) }, // rule 359
    Rule { lhs: 73, rhs_len: 2, action: RuleAction::Node(803) }, // rule 360
    Rule { lhs: 69, rhs_len: 1, action: RuleAction::Node(804) }, // rule 361
    Rule { lhs: 69, rhs_len: 2, action: RuleAction::Node(804) }, // rule 362
    Rule { lhs: 138, rhs_len: 1, action: RuleAction::Node(805) }, // rule 363
    Rule { lhs: 137, rhs_len: 1, action: RuleAction::Node(806) }, // rule 364
    Rule { lhs: 49, rhs_len: 1, action: RuleAction::Node(807) }, // rule 365
    Rule { lhs: 49, rhs_len: 2, action: RuleAction::Node(807) }, // rule 366
    Rule { lhs: 100, rhs_len: 1, action: RuleAction::Node(808) }, // rule 367
    Rule { lhs: 100, rhs_len: 2, action: RuleAction::Node(808) }, // rule 368
    Rule { lhs: 149, rhs_len: 1, action: RuleAction::Node(809) }, // rule 369
    Rule { lhs: 149, rhs_len: 2, action: RuleAction::Node(809) }, // rule 370
    Rule { lhs: 63, rhs_len: 1, action: RuleAction::Node(810) }, // rule 371
    Rule { lhs: 63, rhs_len: 2, action: RuleAction::Node(810) }, // rule 372
    Rule { lhs: 10, rhs_len: 1, action: RuleAction::Node(811) }, // rule 373
    Rule { lhs: 10, rhs_len: 2, action: RuleAction::Node(811) }, // rule 374
    Rule { lhs: 111, rhs_len: 1, action: RuleAction::Node(812) }, // rule 375
    Rule { lhs: 58, rhs_len: 1, action: RuleAction::Node(813) }, // rule 376
    Rule { lhs: 58, rhs_len: 2, action: RuleAction::Node(813) }, // rule 377
    Rule { lhs: 53, rhs_len: 1, action: RuleAction::Node(814) }, // rule 378
    Rule { lhs: 53, rhs_len: 2, action: RuleAction::Node(814) }, // rule 379
    Rule { lhs: 150, rhs_len: 1, action: RuleAction::Node(815) }, // rule 380
    Rule { lhs: 150, rhs_len: 2, action: RuleAction::Node(815) }, // rule 381
    Rule { lhs: 150, rhs_len: 3, action: RuleAction::Node(815) }, // rule 382
    Rule { lhs: 50, rhs_len: 1, action: RuleAction::Node(816) }, // rule 383
    Rule { lhs: 50, rhs_len: 2, action: RuleAction::Node(816) }, // rule 384
    Rule { lhs: 129, rhs_len: 1, action: RuleAction::Node(817) }, // rule 385
    Rule { lhs: 24, rhs_len: 1, action: RuleAction::Node(818) }, // rule 386
    Rule { lhs: 24, rhs_len: 2, action: RuleAction::Node(818) }, // rule 387
    Rule { lhs: 9, rhs_len: 1, action: RuleAction::Node(819) }, // rule 388
    Rule { lhs: 9, rhs_len: 2, action: RuleAction::Node(819) }, // rule 389
    Rule { lhs: 96, rhs_len: 1, action: RuleAction::Node(821) }, // rule 390
    Rule { lhs: 96, rhs_len: 2, action: RuleAction::Node(821) }, // rule 391
    Rule { lhs: 74, rhs_len: 1, action: RuleAction::Node(822) }, // rule 392
    Rule { lhs: 74, rhs_len: 2, action: RuleAction::Node(822) }, // rule 393
    Rule { lhs: 70, rhs_len: 1, action: RuleAction::Node(823) }, // rule 394
    Rule { lhs: 70, rhs_len: 2, action: RuleAction::Node(823) }, // rule 395
    Rule { lhs: 132, rhs_len: 1, action: RuleAction::Node(824) }, // rule 396
];

/// Human-readable name for a node/terminal category code, for
/// diagnostics and error snapshots. Carried over verbatim from the
/// reference's rule-name table (covers terminals, internal node
/// categories, and compound-lexer driver outputs in one space).
pub(crate) fn rule_name(category: i32) -> &'static str {
    match category {
        0 => "EOT",
        10000 => "text_0",
        1 => "text_A_1",
        2 => "text_B_2",
        3 => "text_C_3",
        4 => "paragraphs_4",
        10 => "paragraph_10",
        11 => "paragraph_A_11",
        12 => "paragraph_B_12",
        20 => "utterance_20",
        30 => "prenex_30",
        32 => "free_modifier_32",
        33 => "free_modifier_A_33",
        34 => "discursive_bridi_34",
        35 => "vocative_35",
        36 => "parenthetical_36",
        40 => "sentence_40",
        41 => "sentence_A_41",
        42 => "statement_42",
        50 => "bridi_tail_50",
        51 => "bridi_tail_A_51",
        52 => "bridi_tail_B_52",
        53 => "bridi_tail_C_53",
        54 => "gek_bridi_tail_54",
        71 => "tail_terms_71",
        80 => "terms_80",
        81 => "term_81",
        82 => "modifier_82",
        83 => "term_set_83",
        90 => "sumti_90",
        91 => "sumti_A_91",
        92 => "sumti_B_92",
        93 => "sumti_C_93",
        94 => "sumti_D_94",
        95 => "sumti_E_95",
        96 => "sumti_F_96",
        110 => "description_110",
        111 => "sumti_tail_111",
        112 => "sumti_tail_A_112",
        121 => "relative_clauses_121",
        122 => "relative_clause_122",
        130 => "selbri_130",
        131 => "selbri_A_131",
        132 => "selbri_B_132",
        133 => "selbri_C_133",
        134 => "selbri_D_134",
        135 => "selbri_E_135",
        136 => "selbri_F_136",
        137 => "GUhEK_selbri_137",
        150 => "tanru_unit_150",
        151 => "tanru_unit_A_151",
        152 => "tanru_unit_B_152",
        160 => "linkargs_160",
        161 => "links_161",
        300 => "quantifier_300",
        310 => "MEX_310",
        311 => "MEX_A_311",
        312 => "MEX_B_312",
        313 => "MEX_C_313",
        330 => "rp_expression_330",
        332 => "rp_operand_332",
        370 => "operator_370",
        371 => "operator_A_371",
        372 => "operator_B_372",
        374 => "MEX_operator_374",
        381 => "operand_381",
        382 => "operand_A_382",
        383 => "operand_B_383",
        385 => "operand_C_385",
        400 => "anaphora_400",
        404 => "cmene_404",
        405 => "cmene_A_405",
        407 => "bridi_valsi_407",
        408 => "bridi_valsi_A_408",
        410 => "para_mark_410",
        411 => "indicators_411",
        412 => "indicators_A_412",
        413 => "indicator_413",
        415 => "DOI_415",
        416 => "COI_416",
        417 => "COI_A_417",
        421 => "JOIK_EK_421",
        422 => "JOIK_JEK_422",
        425 => "NU_425",
        426 => "NU_A_426",
        432 => "quote_arg_432",
        433 => "quote_arg_A_433",
        434 => "ZOI_quote_434",
        435 => "ZO_quote_435",
        436 => "LOhU_quote_436",
        440 => "SEI_440",
        443 => "CO_443",
        444 => "CEI_444",
        445 => "NA_445",
        447 => "TUhE_447",
        448 => "LIhU_gap_448",
        450 => "gap_450",
        451 => "front_gap_451",
        452 => "MEX_gap_452",
        453 => "KEI_gap_453",
        454 => "TUhU_gap_454",
        456 => "VAU_gap_456",
        457 => "DOhU_gap_457",
        458 => "FEhU_gap_458",
        459 => "SEhU_gap_459",
        460 => "NUhU_gap_460",
        461 => "BOI_gap_461",
        462 => "sub_gap_462",
        463 => "LUhU_gap_463",
        464 => "GEhU_gap_464",
        465 => "MEhU_gap_465",
        466 => "KEhE_gap_466",
        467 => "BEhO_gap_467",
        468 => "TOI_gap_468",
        469 => "KUhO_gap_469",
        470 => "left_bracket_470",
        471 => "right_bracket_gap_471",
        472 => "LOhO_gap_472",
        473 => "TEhU_gap_473",
        474 => "right_br_no_free_474",
        480 => "SE_480",
        481 => "FA_481",
        482 => "NAhE_482",
        483 => "qualifier_483",
        486 => "subscript_486",
        490 => "mod_head_490",
        491 => "tag_491",
        801 => "utterance_ordinal_801",
        802 => "EK_802",
        803 => "EK_BO_803",
        804 => "EK_KE_804",
        805 => "JEK_805",
        806 => "JOIK_806",
        807 => "GEK_807",
        808 => "GUhEK_808",
        809 => "NAhE_BO_809",
        810 => "NA_KU_810",
        811 => "I_BO_811",
        812 => "number_812",
        813 => "GIhEK_BO_813",
        814 => "GIhEK_KE_814",
        815 => "tense_modal_815",
        816 => "GIK_816",
        817 => "lerfu_string_817",
        818 => "GIhEK_818",
        819 => "I_819",
        821 => "JEK_BO_821",
        822 => "JOIK_BO_822",
        823 => "JOIK_KE_823",
        824 => "PA_MOI_824",
        906 => "utt_ordinal_root_906",
        911 => "EK_root_911",
        926 => "JEK_root_926",
        931 => "JOIK_root_931",
        932 => "interval_932",
        956 => "I_root_956",
        957 => "simple_JOIK_JEK_957",
        961 => "number_root_961",
        971 => "simple_tag_971",
        972 => "simple_tense_modal_972",
        973 => "simple_tense_modal_A_973:",
        974 => "modal_974",
        975 => "modal_A_975",
        977 => "tense_A_977",
        978 => "tense_B_978",
        979 => "tense_C_979",
        981 => "GIK_root_981",
        986 => "lerfu_string_root_986",
        987 => "lerfu_word_987",
        991 => "GIhEK_root_991",
        1030 => "time_1030",
        1031 => "time_A_1031",
        1032 => "time_B_1032",
        1033 => "time_offset_1033",
        1034 => "time_interval_1034",
        1035 => "time_direction_1035",
        1040 => "space_1040",
        1041 => "space_motion_1041",
        1042 => "space_A_1042",
        1043 => "space_B_1043",
        1044 => "space_C_1044",
        1045 => "space_offset_1045",
        1046 => "space_intval_1046",
        1047 => "space_intval_A_1047",
        1048 => "space_direction_1048",
        1050 => "interval_modifier_1050",
        1051 => "interval_property_1051",
        1052 => "event_mod_1052",
        1053 => "event_mod_A_1053",
        501 => "A",
        502 => "BAI",
        503 => "BA'E",
        504 => "BE",
        505 => "BEI",
        506 => "BE'O",
        507 => "BI'I",
        508 => "BO",
        509 => "BRIVLA",
        511 => "BU",
        513 => "BY",
        514 => "CA'A",
        515 => "CAI",
        516 => "CEI",
        517 => "CMENE",
        518 => "CO",
        519 => "COI",
        520 => "CU",
        521 => "CU'E",
        524 => "DA'O",
        525 => "DOI",
        526 => "DO'U",
        527 => "FA",
        528 => "FA'A",
        529 => "FA'O",
        530 => "FE'E",
        531 => "FE'U",
        532 => "FI'O",
        533 => "FOI",
        535 => "FU'E",
        536 => "FU'O",
        537 => "GA",
        538 => "GE'U",
        539 => "GI",
        541 => "GI'A",
        542 => "GOI",
        543 => "GO'A",
        544 => "GU'A",
        545 => "I",
        546 => "JA",
        547 => "JAI",
        548 => "JOI",
        550 => "KE'E",
        551 => "KE",
        552 => "KEI",
        554 => "KI",
        555 => "KO'A",
        556 => "KU",
        557 => "KU'O",
        558 => "LA",
        559 => "LAU",
        561 => "LA'E",
        562 => "LE",
        565 => "LE'U",
        566 => "LI",
        567 => "LI'U",
        568 => "LO'O",
        569 => "LO'U",
        571 => "LU",
        573 => "LU'U",
        574 => "ME",
        575 => "ME'U",
        577 => "MO'I",
        578 => "NA",
        581 => "NAI",
        583 => "NA'E",
        584 => "NI'O",
        585 => "NOI",
        586 => "NU",
        587 => "NU'I",
        588 => "NU'U",
        592 => "PU",
        593 => "RA'O",
        594 => "ROI",
        595 => "SA",
        596 => "SE",
        597 => "SEI",
        598 => "SE'U",
        601 => "SI",
        602 => "SOI",
        603 => "SU",
        604 => "TA'E",
        605 => "TEI",
        606 => "TO",
        607 => "TOI",
        610 => "TU'E",
        611 => "TU'U",
        612 => "UI",
        613 => "VA",
        614 => "VAU",
        615 => "VE'A",
        616 => "VI'A",
        617 => "XI",
        618 => "Y",
        621 => "ZA'O",
        622 => "ZE'A",
        623 => "ZEI",
        624 => "ZI",
        625 => "ZI'E",
        626 => "ZO",
        627 => "ZOI",
        628 => "ZO'U",
        651 => "BOI",
        655 => "FU'A",
        656 => "GA'O",
        657 => "JO'I",
        658 => "KU'E",
        661 => "MAI",
        662 => "MA'O",
        663 => "MOI",
        664 => "MO'E",
        665 => "NA'U",
        666 => "NI'E",
        667 => "NU'A",
        672 => "PA",
        673 => "PE'O",
        675 => "TE'U",
        677 => "VEI",
        678 => "VE'O",
        679 => "VU'U",
        697 => "any",
        698 => "any",
        699 => "anyt'ing",
        905 => "lexer_A (utterance ordinal)",
        910 => "lexer_B (ek)",
        915 => "lexer_C (ek with BO)",
        916 => "lexer_D (ek with KE)",
        925 => "lexer_E (jek)",
        930 => "lexer_F (joik)",
        935 => "lexer_G (gek)",
        940 => "lexer_H (guhek)",
        945 => "lexer_I (NAhE BO)",
        950 => "lexer_J (NA KU)",
        955 => "lexer_K (i with BO)",
        960 => "lexer_L (number)",
        965 => "lexer_M (gihek with BO)",
        966 => "lexer_N (gihek with KE)",
        970 => "lexer_O (tense/modal)",
        980 => "lexer_P (gik)",
        985 => "lexer_Q (lerfu string)",
        990 => "lexer_R (gihek)",
        995 => "lexer_S (i or ijek)",
        1000 => "lexer",
        1005 => "lexer_U (jek with BO)",
        1010 => "lexer_V (joik with BO)",
        1015 => "lexer_W (joik with KE)",
        1020 => "lexer",
        1025 => "lexer_Y (numeric selbri)",
        _ => "?",
    }
}
