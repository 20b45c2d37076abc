//! Canned reply texts.
//!
//! These are the literal blocks sent back to users. Keep them in sync with
//! the keyword table in [`crate::interaction::dispatch`].

/// Menu of everything the bot knows about.
pub const MENU: &str = "📌 เมนูแผนเที่ยวญี่ปุ่น (พิมพ์คีย์เวิร์ดเพื่อดูรายละเอียด)\n\
• โตเกียว5วัน  – แพลนเที่ยวเมือง + Day trip\n\
• โอซาก้า–เกียวโต – เส้นทางคันไซฮิต 4–5 วัน\n\
• ฮอกไกโด – ซัปโปโร/โอตารุ/บิเอะ\n\
• คิวชู – ฟุกุโอกะ/นางาซากิ/เบปปุ\n\
• ซากุระ – ช่วงแนะนำชมซากุระ\n\
• ใบไม้เปลี่ยนสี – จุดไฮไลต์\n\
• JR PASS – การเลือกตั๋วรถไฟ\n\
• SUICA – การ์ดจ่ายค่าเดินทาง\n\
• WIFI – ซิม/ไวไฟพกพา\n\n\
ลองพิมพ์: โตเกียว5วัน, โอซาก้า–เกียวโต, ฮอกไกโด, คิวชู, ซากุระ, ใบไม้เปลี่ยนสี, jrpass, suica, wifi";

/// Five day Tokyo itinerary.
pub const TOKYO_5_DAYS: &str = "🗼 โตเกียว 5 วัน (ตัวอย่างแผนคร่าวๆ)\n\
Day 1: สนามบิน→ที่พัก, ชินจูกุ/ชิบุยะ, จุดชมวิวโตเกียว\n\
Day 2: วัดอาซากุสะ–โตเกียวสกายทรี–อุเอโนะ/อากิฮาบาระ\n\
Day 3: Day Trip → ฟูจิ/คาวากุจิโกะ หรือ Nikko/Kamakura\n\
Day 4: โอไดบะ/TeamLab–กินเที่ยวย่าน Ginza–Tokyo Station\n\
Day 5: ซื้อของฝาก–สนามบิน\n\n\
💡 การเดินทาง: IC Card (Suica/Pasmo) สะดวกสุดในโตเกียว\n\
📎 เพิ่มเติม: https://www.gotokyo.org/en/  (ข้อมูลทางการ)";

/// Osaka and Kyoto itinerary.
pub const KANSAI: &str = "⛩️ โอซาก้า–เกียวโต (4–5 วัน)\n\
Day 1: โอซาก้า (Dotonbori–Shinsaibashi–Umeda Sky)\n\
Day 2: เกียวโต (Fushimi Inari–Kiyomizu–Gion)\n\
Day 3: นารา (Todaiji–สวนกวาง) + กลับโอซาก้า\n\
Day 4: Universal/Osaka Castle หรือ Kobe\n\
Day 5: ช้อปของฝาก–สนามบิน\n\n\
💡 บัตรแนะนำ: Kansai Thru Pass/ICOCA ขึ้นกับแผน\n\
📎 เพิ่มเติม: https://www.japan-guide.com/e/e2157.html";

/// Hokkaido overview.
pub const HOKKAIDO: &str = "❄️ ฮอกไกโด (6–7 วัน แบบย่อ)\n\
ซัปโปโร–โอตารุ–นิงเกิ้ลเทอเรส/ฟุราโนะ–บิเอะ–ทะเลสาบโทยะ\n\
ถ้าหน้าหนาว: เทศกาลหิมะซัปโปโร, ลานสกี\n\
💡 รถเช่า/บัส/รถไฟ ขึ้นกับเส้นทางและฤดูกาล\n\
📎 เพิ่มเติม: https://www.visit-hokkaido.jp/en/";

/// Kyushu overview.
pub const KYUSHU: &str = "🌋 คิวชู (ฟุกุโอกะ–นางาซากิ–คุมาโมโตะ–เบปปุ)\n\
แนะนำ 5–7 วัน: ฟุกุโอกะ(กิน–ช้อป)→นางาซากิ(Glovers/Dejima)\n\
→คุมาโมโตะ(ปราสาท)→ยูฟุอิน/เบปปุ(ออนเซ็น)\n\
📎 เพิ่มเติม: https://www.japan-guide.com/list/e1108.html";

/// Cherry blossom season.
pub const SAKURA: &str = "🌸 ซากุระญี่ปุ่นโดยทั่วไป: ปลายมี.ค.–ต้นเม.ย. (โตเกียว/คันโต)\n\
คันไซ: ช่วงเวลาใกล้เคียงกัน / ฮอกไกโดช้ากว่า (ปลายเม.ย.–พ.ค.)\n\
📎 ดูพยากรณ์อัปเดต: https://www.japan-guide.com/sakura/\n\
💡 ทริค: เช็กพยากรณ์ใกล้วันเดินทางอีกครั้ง";

/// Autumn leaves season.
pub const MOMIJI: &str = "🍁 ใบไม้เปลี่ยนสี (โมมิจิ) ช่วงทั่วไป: ปลายต.ค.–ปลายพ.ย.\n\
คันไซ/คันโต: พีคประมาณพ.ย. / ฮอกไกโดเร็วกว่า (ปลายก.ย.–ต.ค.)\n\
📎 ติดตามอัปเดต: https://www.japan-guide.com/fallcolor/\n\
💡 จุดฮิต: Arashiyama, Kiyomizu, Meiji Jingu Gaien, Nikko";

/// Choosing rail passes.
pub const JR_PASS: &str = "🚄 JR PASS/ตั๋วรถไฟ: เลือกตามเส้นทางจริง\n\
• Tokyo only → ไม่คุ้ม JR Pass, ใช้ IC Card/ตั๋วรายวัน\n\
• วิ่งข้ามภูมิภาคบ่อย ๆ → ค่อยพิจารณา JR Pass/Regional Pass\n\
📎 เปรียบเทียบแพ็กเกจ: https://japanrailpass.net/  และ https://www.japan-guide.com/e/e2357.html";

/// IC transit cards.
pub const SUICA: &str = "💳 SUICA/PASMO/ICOCA = บัตรแตะจ่ายรถไฟ/บัส/ร้านสะดวกซื้อ\n\
ซื้อ/เติมได้ที่สถานีใหญ่ เครื่องอัตโนมัติใช้งานง่าย\n\
📎 วิธีใช้: https://www.japan-guide.com/e/e2359_003.html";

/// SIM cards and pocket WiFi.
pub const WIFI: &str = "📶 อินเทอร์เน็ตญี่ปุ่น: ซิม/ไวไฟพกพา\n\
• ซิม Data 7–15GB เหมาะไปเดี่ยว/คู่\n\
• WiFi Pocket เหมาะไปกันหลายคน แชร์สะดวก\n\
📎 เปรียบเทียบแพ็กเกจ: ลองเช็คผู้ให้บริการในไทย + รีวิวล่าสุด";

/// Generic help block, also appended to the fallback reply.
pub const HELP: &str = "พิมพ์ 'เมนู' เพื่อดูตัวเลือกทั้งหมด\n\
ตัวอย่าง: โตเกียว5วัน, โอซาก้า–เกียวโต, ฮอกไกโด, คิวชู, ซากุระ, ใบไม้เปลี่ยนสี, jrpass, suica, wifi";

/// Prefix of the fallback reply, followed by the user's own text.
pub const FALLBACK_PREFIX: &str = "บอทตอบ: ";

/// Keywords offered as quick-reply buttons on the menu, help and fallback replies.
pub const QUICK_REPLY_KEYWORDS: &[&str] = &["เมนู", "โตเกียว5วัน", "โอซาก้า–เกียวโต", "ฮอกไกโด", "คิวชู", "ซากุระ", "ใบไม้เปลี่ยนสี", "jrpass", "suica", "wifi"];

/// Build the fallback text for text that matched no rule.
pub fn fallback(raw_text: &str) -> String {
    format!("{FALLBACK_PREFIX}{raw_text}\n\n{HELP}")
}
